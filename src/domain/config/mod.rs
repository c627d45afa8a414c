//! Configuration value objects

mod app_config;

pub use app_config::{
    AppConfig, StorageConfig, CLIPBOARD_BACKEND_ARBOARD, CLIPBOARD_BACKEND_WAYLAND,
    VALID_CLIPBOARD_BACKENDS,
};
