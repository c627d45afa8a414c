//! ClipBridge - clipboard and tag storage bridge for an embedded UI
//!
//! This crate watches the host clipboard and forwards each new text value to
//! a UI application, and persists the tag list the UI sends back.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Clipboard samples, tag sets, channel messages, config, errors
//! - **Application**: Clipboard poller, tag repository, bridge controller, ports
//! - **Infrastructure**: Adapters (arboard, wl-paste, JSON file store, JSON-lines UI channel)
//! - **CLI**: Argument parsing, logging, signal handling, subcommands

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
