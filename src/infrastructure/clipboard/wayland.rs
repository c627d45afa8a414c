//! Wayland clipboard adapter using wl-paste

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{ClipboardError, ClipboardReader};

/// Wayland clipboard adapter using wl-paste
pub struct WaylandClipboard;

impl WaylandClipboard {
    /// Create a new Wayland clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

/// wl-paste reports an empty selection on stderr and exits non-zero.
fn is_empty_selection(stderr: &str) -> bool {
    let stderr = stderr.to_lowercase();
    stderr.contains("nothing is copied") || stderr.contains("no selection")
}

#[async_trait]
impl ClipboardReader for WaylandClipboard {
    async fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        let output = Command::new("wl-paste")
            .args(["--no-newline", "--type", "text"])
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::WlPasteNotFound
                } else {
                    ClipboardError::ReadFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if is_empty_selection(&stderr) {
                return Ok(None);
            }
            return Err(ClipboardError::ReadFailed(format!(
                "wl-paste exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_empty_selection_messages() {
        assert!(is_empty_selection("Nothing is copied\n"));
        assert!(is_empty_selection("No selection"));
        assert!(!is_empty_selection("Failed to connect to a Wayland server"));
    }
}
