//! TOML config file under the user's config directory

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::infrastructure::atomic_file;

/// `config.toml` in the clip-bridge config directory.
///
/// Saves go through a staged file and a rename, so a crashed `config set`
/// leaves the previous file intact.
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/clip-bridge/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("clip-bridge")
            .join("config.toml")
    }

    fn decode(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn encode(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    async fn is_present(&self) -> Result<bool, ConfigError> {
        fs::try_exists(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Self::decode(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no config file, using empty layer");
                Ok(AppConfig::empty())
            }
            Err(e) => Err(ConfigError::ReadError(e.to_string())),
        }
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = Self::encode(config)?;
        atomic_file::replace(&self.path, content.as_bytes())
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    fn location(&self) -> &Path {
        &self.path
    }

    async fn init(&self) -> Result<AppConfig, ConfigError> {
        if self.is_present().await? {
            return Err(ConfigError::AlreadyExists(self.path.display().to_string()));
        }
        let defaults = AppConfig::defaults();
        self.save(&defaults).await?;
        Ok(defaults)
    }
}
