//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard reads using arboard (primary)
//! or wl-paste on Wayland.

mod arboard;
mod wayland;

pub use arboard::ArboardClipboard;
pub use wayland::WaylandClipboard;

use crate::application::ports::ClipboardReader;
use crate::domain::config::CLIPBOARD_BACKEND_WAYLAND;

/// Create the clipboard reader for the named backend
///
/// Anything other than "wayland" uses arboard.
pub fn create_clipboard(backend: &str) -> Box<dyn ClipboardReader> {
    if backend.eq_ignore_ascii_case(CLIPBOARD_BACKEND_WAYLAND) {
        Box::new(WaylandClipboard::new())
    } else {
        Box::new(ArboardClipboard::new())
    }
}
