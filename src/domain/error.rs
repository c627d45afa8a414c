//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected <number> followed by ms, s or m (e.g., 100ms, 2s, 1m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when an unknown read-failure policy is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid read-failure policy: \"{input}\". Valid policies are: empty, keep")]
pub struct InvalidPolicyError {
    pub input: String,
}

/// Error when a tag payload cannot be turned into a stored record
#[derive(Debug, Clone, Error)]
pub enum TagSetError {
    #[error("Tag payload must be a sequence, got {0}")]
    NotASequence(&'static str),

    #[error("Failed to serialize tags: {0}")]
    Serialize(String),

    #[error("Failed to parse stored tags: {0}")]
    Deserialize(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
