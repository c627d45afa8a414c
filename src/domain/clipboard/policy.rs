//! Read-failure normalization policy

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidPolicyError;

/// How an unavailable clipboard read is folded into change detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFailurePolicy {
    /// Treat a failed read like an empty clipboard
    #[default]
    Empty,
    /// Ignore the failed read and keep the last known value
    Keep,
}

impl ReadFailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadFailurePolicy::Empty => "empty",
            ReadFailurePolicy::Keep => "keep",
        }
    }

    pub fn all() -> &'static [ReadFailurePolicy] {
        &[ReadFailurePolicy::Empty, ReadFailurePolicy::Keep]
    }
}

impl FromStr for ReadFailurePolicy {
    type Err = InvalidPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "empty" => Ok(ReadFailurePolicy::Empty),
            "keep" => Ok(ReadFailurePolicy::Keep),
            _ => Err(InvalidPolicyError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ReadFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
