//! Domain layer - Core bridge types
//!
//! Contains value objects, channel messages, and domain errors.
//! This layer has no dependencies on external systems.

pub mod channel;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod tags;
pub mod timing;

// Re-export common types
pub use channel::{InboundMessage, OutboundMessage};
pub use clipboard::{ClipboardSample, ClipboardSnippet, ReadFailurePolicy};
pub use config::AppConfig;
pub use error::*;
pub use tags::{InitFlags, TagSet};
pub use timing::Duration;
