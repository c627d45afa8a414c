//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod storage;
pub mod ui;

// Re-export common types
pub use clipboard::{ClipboardError, ClipboardReader};
pub use config::ConfigStore;
pub use storage::{KeyValueStore, StorageError};
pub use ui::{ChannelError, UiSink, UiSource};
