//! Config file port

use std::path::Path;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Persisted config layer, merged under environment and CLI overrides.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the stored layer. A store that was never written is an empty layer.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Replace the stored layer as a whole.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Where the layer lives, shown by `config path`.
    fn location(&self) -> &Path;

    /// Write the default layer and return it.
    /// Refuses to overwrite a layer that is already there.
    async fn init(&self) -> Result<AppConfig, ConfigError>;
}
