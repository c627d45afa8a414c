//! Application layer - Bridge use cases and port interfaces
//!
//! Contains the clipboard poller, the tag repository, and the bridge
//! controller that wires them to the UI channel.

pub mod bridge;
pub mod poller;
pub mod ports;
pub mod tags;

// Re-export use cases
pub use bridge::{BridgeController, BridgeError};
pub use poller::{ClipboardPoller, PollerConfig};
pub use tags::{TagPersistError, TagRepository};
