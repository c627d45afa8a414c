//! Clipboard domain types

mod policy;
mod snippet;

pub use policy::ReadFailurePolicy;
pub use snippet::{ClipboardSample, ClipboardSnippet};
