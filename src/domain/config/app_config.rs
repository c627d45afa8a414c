//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::clipboard::ReadFailurePolicy;
use crate::domain::tags::DEFAULT_TAGS_KEY;
use crate::domain::timing::Duration;

/// Clipboard backends the bridge can read from
pub const CLIPBOARD_BACKEND_ARBOARD: &str = "arboard";
pub const CLIPBOARD_BACKEND_WAYLAND: &str = "wayland";
pub const VALID_CLIPBOARD_BACKENDS: &[&str] = &[CLIPBOARD_BACKEND_ARBOARD, CLIPBOARD_BACKEND_WAYLAND];

/// Durable storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: Option<String>,
    pub key: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub poll_interval: Option<String>,
    pub read_timeout: Option<String>,
    pub on_read_failure: Option<String>,
    pub clipboard_backend: Option<String>,
    pub log_level: Option<String>,
    pub ui_socket: Option<String>,
    pub storage: Option<StorageConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            poll_interval: Some(Duration::default_poll_interval().to_string()),
            read_timeout: Some(Duration::default_read_timeout().to_string()),
            on_read_failure: Some(ReadFailurePolicy::default().to_string()),
            clipboard_backend: Some(CLIPBOARD_BACKEND_ARBOARD.to_string()),
            log_level: Some("info".to_string()),
            ui_socket: None,
            storage: Some(StorageConfig {
                path: None,
                key: Some(DEFAULT_TAGS_KEY.to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            poll_interval: other.poll_interval.or(self.poll_interval),
            read_timeout: other.read_timeout.or(self.read_timeout),
            on_read_failure: other.on_read_failure.or(self.on_read_failure),
            clipboard_backend: other.clipboard_backend.or(self.clipboard_backend),
            log_level: other.log_level.or(self.log_level),
            ui_socket: other.ui_socket.or(self.ui_socket),
            storage: Self::merge_storage_config(self.storage, other.storage),
        }
    }

    fn merge_storage_config(
        base: Option<StorageConfig>,
        other: Option<StorageConfig>,
    ) -> Option<StorageConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(StorageConfig {
                path: o.path.or(b.path),
                key: o.key.or(b.key),
            }),
        }
    }

    pub fn clipboard_backend_or_default(&self) -> &str {
        self.clipboard_backend
            .as_deref()
            .unwrap_or(CLIPBOARD_BACKEND_ARBOARD)
    }

    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    pub fn storage_path(&self) -> Option<&str> {
        self.storage.as_ref().and_then(|s| s.path.as_deref())
    }

    pub fn storage_key_or_default(&self) -> &str {
        self.storage
            .as_ref()
            .and_then(|s| s.key.as_deref())
            .filter(|k| !k.is_empty())
            .unwrap_or(DEFAULT_TAGS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.poll_interval, Some("100ms".to_string()));
        assert_eq!(config.read_timeout, Some("2s".to_string()));
        assert_eq!(config.on_read_failure, Some("empty".to_string()));
        assert_eq!(config.clipboard_backend, Some("arboard".to_string()));
        assert!(config.ui_socket.is_none());
        assert_eq!(config.storage_key_or_default(), "tags");
        assert!(config.storage_path().is_none());
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.poll_interval.is_none());
        assert!(config.clipboard_backend.is_none());
        assert!(config.storage.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            poll_interval: Some("100ms".to_string()),
            clipboard_backend: Some("arboard".to_string()),
            ..Default::default()
        };
        let other = AppConfig {
            poll_interval: None,
            clipboard_backend: Some("wayland".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.poll_interval, Some("100ms".to_string()));
        assert_eq!(merged.clipboard_backend_or_default(), "wayland");
    }

    #[test]
    fn merge_storage_config_fieldwise() {
        let base = AppConfig {
            storage: Some(StorageConfig {
                path: Some("/base/storage.json".to_string()),
                key: Some("tags".to_string()),
            }),
            ..Default::default()
        };
        let other = AppConfig {
            storage: Some(StorageConfig {
                path: None,
                key: Some("labels".to_string()),
            }),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.storage_path(), Some("/base/storage.json"));
        assert_eq!(merged.storage_key_or_default(), "labels");
    }

    #[test]
    fn empty_storage_key_falls_back_to_default() {
        let config = AppConfig {
            storage: Some(StorageConfig {
                path: None,
                key: Some(String::new()),
            }),
            ..Default::default()
        };
        assert_eq!(config.storage_key_or_default(), "tags");
    }

    #[test]
    fn toml_uses_storage_table() {
        let config: AppConfig = toml::from_str(
            r#"
poll_interval = "50ms"

[storage]
key = "labels"
"#,
        )
        .unwrap();
        assert_eq!(config.poll_interval.as_deref(), Some("50ms"));
        assert_eq!(config.storage_key_or_default(), "labels");
    }
}
