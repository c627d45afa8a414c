//! Clipboard sample and last-known snippet

use super::ReadFailurePolicy;

/// Outcome of a single clipboard read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardSample {
    /// The clipboard holds text
    Text(String),
    /// The host reported no text content
    Empty,
    /// The host read failed or timed out
    Unavailable(String),
}

impl ClipboardSample {
    /// Build a sample from an optional host read
    pub fn from_text(text: Option<String>) -> Self {
        match text {
            Some(text) => ClipboardSample::Text(text),
            None => ClipboardSample::Empty,
        }
    }

    /// Fold the sample into the value used for change detection.
    ///
    /// Returns `None` when the policy says the sample should be ignored.
    pub fn normalize(self, policy: ReadFailurePolicy) -> Option<String> {
        match self {
            ClipboardSample::Text(text) => Some(text),
            ClipboardSample::Empty => Some(String::new()),
            ClipboardSample::Unavailable(_) => match policy {
                ReadFailurePolicy::Empty => Some(String::new()),
                ReadFailurePolicy::Keep => None,
            },
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, ClipboardSample::Unavailable(_))
    }
}

/// Last-known clipboard text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSnippet {
    value: String,
}

impl ClipboardSnippet {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the snippet if `value` differs, returning the new value on change.
    pub fn update(&mut self, value: String) -> Option<String> {
        if self.value == value {
            return None;
        }
        self.value = value.clone();
        Some(value)
    }
}
