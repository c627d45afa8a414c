//! Timing value objects

mod duration;

pub use duration::{Duration, DEFAULT_POLL_INTERVAL_MS, DEFAULT_READ_TIMEOUT_MS};
