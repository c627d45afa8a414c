//! Durable key-value storage port interface

use async_trait::async_trait;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to read storage: {0}")]
    ReadError(String),

    #[error("Failed to write storage: {0}")]
    WriteError(String),
}

/// Port for the device-local key-value store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the raw value stored under `key`, or `None` if never written.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Blanket implementation for boxed store types
#[async_trait]
impl KeyValueStore for Box<dyn KeyValueStore> {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.as_ref().get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.as_ref().set(key, value).await
    }
}
