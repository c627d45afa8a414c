//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::clipboard::ReadFailurePolicy;
use crate::domain::config::{AppConfig, StorageConfig, VALID_CLIPBOARD_BACKENDS};
use crate::domain::error::ConfigError;
use crate::domain::timing::Duration;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let written = store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.location().display()
    ));
    for key in VALID_CONFIG_KEYS {
        if let Some(value) = read_value(&written, key) {
            presenter.key_value(key, value);
        }
    }
    Ok(())
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value);

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.load().await?;
    presenter.output(read_value(&config, key).unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, read_value(&config, key).unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.location().to_string_lossy());
    Ok(())
}

/// Store `value` under an already validated key
fn apply_value(config: &mut AppConfig, key: &str, value: &str) {
    let value = value.to_string();
    match key {
        "poll_interval" => config.poll_interval = Some(value),
        "read_timeout" => config.read_timeout = Some(value),
        "on_read_failure" => config.on_read_failure = Some(value.to_lowercase()),
        "clipboard_backend" => config.clipboard_backend = Some(value.to_lowercase()),
        "log_level" => config.log_level = Some(value),
        "ui_socket" => config.ui_socket = Some(value),
        "storage.path" => config.storage.get_or_insert_with(StorageConfig::default).path = Some(value),
        "storage.key" => config.storage.get_or_insert_with(StorageConfig::default).key = Some(value),
        _ => unreachable!(), // Already validated
    }
}

fn read_value<'a>(config: &'a AppConfig, key: &str) -> Option<&'a str> {
    match key {
        "poll_interval" => config.poll_interval.as_deref(),
        "read_timeout" => config.read_timeout.as_deref(),
        "on_read_failure" => config.on_read_failure.as_deref(),
        "clipboard_backend" => config.clipboard_backend.as_deref(),
        "log_level" => config.log_level.as_deref(),
        "ui_socket" => config.ui_socket.as_deref(),
        "storage.path" => config.storage.as_ref().and_then(|s| s.path.as_deref()),
        "storage.key" => config.storage.as_ref().and_then(|s| s.key.as_deref()),
        _ => None,
    }
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "poll_interval" | "read_timeout" => {
            value
                .parse::<Duration>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "on_read_failure" => {
            value
                .parse::<ReadFailurePolicy>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "clipboard_backend" => {
            let lower = value.to_lowercase();
            if !VALID_CLIPBOARD_BACKENDS.contains(&lower.as_str()) {
                return Err(invalid(format!(
                    "Invalid value '{}'. Valid options: {}",
                    value,
                    VALID_CLIPBOARD_BACKENDS.join(", ")
                )));
            }
        }
        "log_level" => {
            let valid = ["error", "warn", "info", "debug", "trace"];
            if !valid.contains(&value.to_lowercase().as_str()) {
                return Err(invalid(format!(
                    "Invalid value '{}'. Valid: {}",
                    value,
                    valid.join(", ")
                )));
            }
        }
        "storage.key" | "storage.path" | "ui_socket" => {
            if value.trim().is_empty() {
                return Err(invalid("Value must not be empty".to_string()));
            }
        }
        _ => {}
    }
    Ok(())
}
