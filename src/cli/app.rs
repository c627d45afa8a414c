//! Main app runner for bridge mode

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

use crate::application::ports::{ConfigStore, KeyValueStore};
use crate::application::{BridgeController, ClipboardPoller, PollerConfig, TagRepository};
use crate::domain::clipboard::ReadFailurePolicy;
use crate::domain::config::{AppConfig, StorageConfig};
use crate::domain::error::ConfigError;
use crate::domain::timing::Duration;
use crate::infrastructure::{channel, create_clipboard, JsonFileStore, MemoryStore, XdgConfigStore};

use super::args::{BridgeOptions, Cli};
use super::presenter::Presenter;
use super::signals::shutdown_signal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment overrides
pub const ENV_STORAGE_PATH: &str = "CLIP_BRIDGE_STORAGE_PATH";
pub const ENV_UI_SOCKET: &str = "CLIP_BRIDGE_UI_SOCKET";

/// Run the bridge until the UI disconnects or a shutdown signal arrives
pub async fn run_bridge(options: BridgeOptions) -> ExitCode {
    let presenter = Presenter::new();

    // Attach to the UI first; without it there is nothing to bridge to.
    let ui_socket = options.ui_socket.as_ref().map(PathBuf::from);
    let (sink, mut source) = match channel::open(ui_socket.as_deref()).await {
        Ok(endpoints) => endpoints,
        Err(e) => {
            error!(error = %e, "cannot attach to UI");
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Create adapters
    let reader = create_clipboard(&options.clipboard_backend);
    let store: Box<dyn KeyValueStore> = if options.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(JsonFileStore::with_path(storage_path(&options)))
    };

    let poller = ClipboardPoller::new(
        reader,
        PollerConfig {
            interval: options.poll_interval,
            read_timeout: options.read_timeout,
            on_read_failure: options.on_read_failure,
        },
    );
    let tags = TagRepository::new(store, options.storage_key.clone());
    let mut controller = BridgeController::new(poller, tags, sink);

    let storage_label = if options.ephemeral {
        "memory".to_string()
    } else {
        storage_path(&options).display().to_string()
    };
    let ui_label = ui_socket
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdio".to_string());
    info!(
        backend = %options.clipboard_backend,
        interval = %options.poll_interval,
        storage = %storage_label,
        key = %options.storage_key,
        ui = %ui_label,
        "bridge starting"
    );

    match controller.run(&mut source, shutdown_signal()).await {
        Ok(()) => {
            info!("bridge stopped");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            error!(error = %e, "bridge failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Resolved storage file: configured path or the default data path
pub fn storage_path(options: &BridgeOptions) -> PathBuf {
    options
        .storage_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(JsonFileStore::default_path)
}

/// Build a config layer from CLI flags
pub fn cli_config(cli: &Cli) -> AppConfig {
    let storage = if cli.storage_file.is_some() || cli.storage_key.is_some() {
        Some(StorageConfig {
            path: cli.storage_file.clone(),
            key: cli.storage_key.clone(),
        })
    } else {
        None
    };

    AppConfig {
        poll_interval: cli.poll_interval.clone(),
        read_timeout: cli.read_timeout.clone(),
        on_read_failure: cli
            .on_read_failure
            .map(|p| ReadFailurePolicy::from(p).to_string()),
        clipboard_backend: cli.clipboard_backend.map(|b| b.as_str().to_string()),
        log_level: None,
        ui_socket: cli.ui_socket.clone(),
        storage,
    }
}

/// Build a config layer from environment variables
pub fn env_config() -> AppConfig {
    let storage_path = env::var(ENV_STORAGE_PATH).ok().filter(|s| !s.is_empty());
    AppConfig {
        ui_socket: env::var(ENV_UI_SOCKET).ok().filter(|s| !s.is_empty()),
        storage: storage_path.map(|path| StorageConfig {
            path: Some(path),
            key: None,
        }),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}

/// Turn merged config into bridge options, rejecting unparseable values
pub fn resolve_options(config: &AppConfig, ephemeral: bool) -> Result<BridgeOptions, ConfigError> {
    let invalid = |key: &str, message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    let poll_interval = match config.poll_interval.as_deref() {
        Some(s) => s
            .parse::<Duration>()
            .map_err(|e| invalid("poll_interval", e.to_string()))?,
        None => Duration::default_poll_interval(),
    };
    let read_timeout = match config.read_timeout.as_deref() {
        Some(s) => s
            .parse::<Duration>()
            .map_err(|e| invalid("read_timeout", e.to_string()))?,
        None => Duration::default_read_timeout(),
    };
    let on_read_failure = match config.on_read_failure.as_deref() {
        Some(s) => s
            .parse::<ReadFailurePolicy>()
            .map_err(|e| invalid("on_read_failure", e.to_string()))?,
        None => ReadFailurePolicy::default(),
    };

    Ok(BridgeOptions {
        poll_interval,
        read_timeout,
        on_read_failure,
        clipboard_backend: config.clipboard_backend_or_default().to_string(),
        storage_file: config.storage_path().map(str::to_string),
        storage_key: config.storage_key_or_default().to_string(),
        ui_socket: config.ui_socket.clone(),
        ephemeral,
    })
}
