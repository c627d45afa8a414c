//! Tracing subscriber setup
//!
//! Logs always go to stderr: in stdio mode stdout carries the UI channel.

use tracing_subscriber::{fmt, EnvFilter};

/// Build the filter: `RUST_LOG` wins, then `-v`, then the configured level.
pub fn build_filter(verbosity: Option<&str>, configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = verbosity.unwrap_or(configured);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(verbosity: Option<&str>, configured: &str) {
    let detailed = verbosity == Some("trace");
    let _ = fmt()
        .with_env_filter(build_filter(verbosity, configured))
        .with_writer(std::io::stderr)
        .with_target(detailed)
        .try_init();
}
