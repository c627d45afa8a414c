//! Messages exchanged with the UI application

mod message;

pub use message::{InboundMessage, OutboundMessage};
