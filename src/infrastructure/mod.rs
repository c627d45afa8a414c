//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the host clipboard, the local filesystem, and the
//! UI channel transports.

mod atomic_file;
pub mod channel;
pub mod clipboard;
pub mod config;
pub mod storage;

// Re-export adapters
pub use channel::{JsonLinesSink, JsonLinesSource};
pub use clipboard::{create_clipboard, ArboardClipboard, WaylandClipboard};
pub use config::XdgConfigStore;
pub use storage::{JsonFileStore, MemoryStore};
