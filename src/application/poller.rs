//! Clipboard change detection

use std::time::Duration as StdDuration;

use tokio::time::timeout;
use tracing::debug;

use crate::domain::clipboard::{ClipboardSample, ClipboardSnippet, ReadFailurePolicy};
use crate::domain::timing::Duration;

use super::ports::ClipboardReader;

/// Configuration for the clipboard poller
#[derive(Debug, Clone, Copy)]
pub struct PollerConfig {
    /// Cadence of `poll()` calls
    pub interval: Duration,
    /// Bound on one host read
    pub read_timeout: Duration,
    /// How failed reads are folded into change detection
    pub on_read_failure: ReadFailurePolicy,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::default_poll_interval(),
            read_timeout: Duration::default_read_timeout(),
            on_read_failure: ReadFailurePolicy::default(),
        }
    }
}

/// Samples the host clipboard and reports each change exactly once.
pub struct ClipboardPoller<C: ClipboardReader> {
    reader: C,
    snippet: ClipboardSnippet,
    seeded: bool,
    config: PollerConfig,
}

impl<C: ClipboardReader> ClipboardPoller<C> {
    pub fn new(reader: C, config: PollerConfig) -> Self {
        Self {
            reader,
            snippet: ClipboardSnippet::default(),
            seeded: false,
            config,
        }
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    pub fn snippet(&self) -> &ClipboardSnippet {
        &self.snippet
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Read the clipboard once, keeping "no text" and "read failed" apart.
    pub async fn sample(&self) -> ClipboardSample {
        let read_timeout: StdDuration = self.config.read_timeout.as_std();
        match timeout(read_timeout, self.reader.read_text()).await {
            Ok(Ok(text)) => ClipboardSample::from_text(text),
            Ok(Err(e)) => ClipboardSample::Unavailable(e.to_string()),
            Err(_) => ClipboardSample::Unavailable(format!(
                "read timed out after {}",
                self.config.read_timeout
            )),
        }
    }

    /// Record the launch content so the first tick does not report it.
    pub async fn seed(&mut self) {
        let sample = self.sample().await;
        if let ClipboardSample::Unavailable(reason) = &sample {
            debug!(%reason, "clipboard unavailable while seeding");
        }
        if let Some(value) = sample.normalize(self.config.on_read_failure) {
            self.snippet = ClipboardSnippet::new(value);
        }
        self.seeded = true;
    }

    /// Sample and compare against the last known value.
    ///
    /// # Returns
    /// The new clipboard text if it changed since the previous sample
    pub async fn poll(&mut self) -> Option<String> {
        let sample = self.sample().await;
        if let ClipboardSample::Unavailable(reason) = &sample {
            debug!(%reason, policy = %self.config.on_read_failure, "clipboard read failed");
        }
        let value = sample.normalize(self.config.on_read_failure)?;
        self.snippet.update(value)
    }
}
