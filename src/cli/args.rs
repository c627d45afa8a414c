//! CLI argument definitions using Clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::domain::clipboard::ReadFailurePolicy;
use crate::domain::config::{CLIPBOARD_BACKEND_ARBOARD, CLIPBOARD_BACKEND_WAYLAND};
use crate::domain::timing::Duration;

/// ClipBridge - clipboard and tag storage bridge for an embedded UI
#[derive(Parser, Debug)]
#[command(name = "clip-bridge")]
#[command(version)]
#[command(about = "Forward clipboard changes to a UI and persist its tags")]
#[command(long_about = None)]
pub struct Cli {
    /// Clipboard poll interval (e.g., 100ms, 1s)
    #[arg(short = 'i', long, value_name = "TIME")]
    pub poll_interval: Option<String>,

    /// Give up on a single clipboard read after this long (e.g., 2s)
    #[arg(long, value_name = "TIME")]
    pub read_timeout: Option<String>,

    /// What a failed clipboard read counts as
    #[arg(long, value_name = "POLICY")]
    pub on_read_failure: Option<PolicyArg>,

    /// Clipboard backend to read from
    #[arg(short = 'c', long = "clipboard", value_name = "BACKEND")]
    pub clipboard_backend: Option<BackendArg>,

    /// Storage file for the tag record
    #[arg(long, value_name = "PATH", conflicts_with = "ephemeral")]
    pub storage_file: Option<String>,

    /// Key of the tag record inside the storage file
    #[arg(long, value_name = "KEY")]
    pub storage_key: Option<String>,

    /// Unix socket the UI host listens on (default: stdin/stdout)
    #[arg(long, value_name = "PATH")]
    pub ui_socket: Option<String>,

    /// Keep tags in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Inspect or reset the stored tags
    Tags {
        #[command(subcommand)]
        action: TagsAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Tags action subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum TagsAction {
    /// Print the stored tags as JSON
    Show,
    /// Replace the stored tags with an empty list
    Clear,
    /// Show storage file path
    Path,
}

/// Read-failure policy argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Empty,
    Keep,
}

impl From<PolicyArg> for ReadFailurePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Empty => ReadFailurePolicy::Empty,
            PolicyArg::Keep => ReadFailurePolicy::Keep,
        }
    }
}

/// Clipboard backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Arboard,
    Wayland,
}

impl BackendArg {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendArg::Arboard => CLIPBOARD_BACKEND_ARBOARD,
            BackendArg::Wayland => CLIPBOARD_BACKEND_WAYLAND,
        }
    }
}

/// Parsed bridge options
#[derive(Debug, Clone)]
pub struct BridgeOptions {
    pub poll_interval: Duration,
    pub read_timeout: Duration,
    pub on_read_failure: ReadFailurePolicy,
    pub clipboard_backend: String,
    pub storage_file: Option<String>,
    pub storage_key: String,
    pub ui_socket: Option<String>,
    pub ephemeral: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "poll_interval",
    "read_timeout",
    "on_read_failure",
    "clipboard_backend",
    "log_level",
    "ui_socket",
    "storage.path",
    "storage.key",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// Map `-v` occurrences to a tracing filter level
pub fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}
