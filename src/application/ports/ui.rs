//! UI channel port interfaces

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::channel::{InboundMessage, OutboundMessage};

/// UI channel errors
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("UI endpoint not found: {0}")]
    MissingUiNode(String),

    #[error("UI channel closed")]
    Closed,

    #[error("Failed to encode message: {0}")]
    Encode(String),

    #[error("UI channel I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for delivering messages into the UI (bridge -> UI)
#[async_trait]
pub trait UiSink: Send + Sync {
    /// Deliver one message. No acknowledgment is awaited.
    async fn send(&self, message: &OutboundMessage) -> Result<(), ChannelError>;
}

/// Port for receiving UI-originated events (UI -> bridge)
#[async_trait]
pub trait UiSource: Send {
    /// Wait for the next event.
    ///
    /// # Returns
    /// `Ok(None)` once the UI side has closed the channel
    async fn recv(&mut self) -> Result<Option<InboundMessage>, ChannelError>;
}

/// Blanket implementation for boxed sink types
#[async_trait]
impl UiSink for Box<dyn UiSink> {
    async fn send(&self, message: &OutboundMessage) -> Result<(), ChannelError> {
        self.as_ref().send(message).await
    }
}

/// Blanket implementation for boxed source types
#[async_trait]
impl UiSource for Box<dyn UiSource> {
    async fn recv(&mut self) -> Result<Option<InboundMessage>, ChannelError> {
        self.as_mut().recv().await
    }
}
