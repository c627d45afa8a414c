//! CLI layer - Command-line interface
//!
//! Contains argument parsing, logging setup, output formatting, signal
//! handling, and the bridge runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;
pub mod signals;
pub mod tags_cmd;

// Re-export commonly used types
pub use app::{run_bridge, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{BridgeOptions, Cli, Commands, ConfigAction, TagsAction};
pub use presenter::Presenter;
