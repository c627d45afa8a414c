//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("wl-paste not found. Please install wl-clipboard.")]
    WlPasteNotFound,

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),
}

/// Port for reading the host clipboard
#[async_trait]
pub trait ClipboardReader: Send + Sync {
    /// Read the current clipboard text.
    ///
    /// # Returns
    /// `Ok(None)` when the clipboard holds no text, error when the host
    /// call itself fails
    async fn read_text(&self) -> Result<Option<String>, ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl ClipboardReader for Box<dyn ClipboardReader> {
    async fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        self.as_ref().read_text().await
    }
}
