//! Newline-delimited JSON transport for the UI channel

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::{trace, warn};

use crate::application::ports::{ChannelError, UiSink, UiSource};
use crate::domain::channel::{InboundMessage, OutboundMessage};

/// Writes one JSON object per line.
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W> JsonLinesSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

#[async_trait]
impl<W> UiSink for JsonLinesSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn send(&self, message: &OutboundMessage) -> Result<(), ChannelError> {
        let mut line =
            serde_json::to_string(message).map_err(|e| ChannelError::Encode(e.to_string()))?;
        line.push('\n');

        let mut writer = self.writer.lock().await;
        writer.write_all(line.as_bytes()).await.map_err(closed_or_io)?;
        writer.flush().await.map_err(closed_or_io)?;
        trace!(port = message.port(), "message delivered to UI");
        Ok(())
    }
}

/// Reads one JSON object per line.
///
/// Blank lines, bytes that are not UTF-8, malformed JSON, and unknown ports
/// are logged and skipped.
pub struct JsonLinesSource<R> {
    reader: R,
    line: Vec<u8>,
}

impl<R> JsonLinesSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }
}

#[async_trait]
impl<R> UiSource for JsonLinesSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn recv(&mut self) -> Result<Option<InboundMessage>, ChannelError> {
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line).await? == 0 {
                return Ok(None);
            }

            let line = self.line.trim_ascii();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_slice::<InboundMessage>(line) {
                Ok(message) => return Ok(Some(message)),
                Err(e) => warn!(error = %e, "skipping unrecognized UI message"),
            }
        }
    }
}

fn closed_or_io(e: std::io::Error) -> ChannelError {
    if e.kind() == std::io::ErrorKind::BrokenPipe {
        ChannelError::Closed
    } else {
        ChannelError::Io(e)
    }
}
