//! JSON file key-value store

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;

use crate::application::ports::{KeyValueStore, StorageError};
use crate::infrastructure::atomic_file;

/// Key-value store backed by a single JSON object file.
///
/// Each `set` rewrites the whole file through a temp file and a rename, so
/// readers never observe a half-written record.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store at the default data path
    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// `<data_dir>/clip-bridge/storage.json`
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("clip-bridge")
            .join("storage.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file content, `None` when the file does not exist yet
    async fn read_raw(&self) -> std::io::Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

type Entries = BTreeMap<String, String>;

fn parse_entries(content: Option<&str>) -> Result<Entries, serde_json::Error> {
    match content.map(str::trim) {
        None | Some("") => Ok(Entries::new()),
        Some(content) => serde_json::from_str(content),
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let raw = self
            .read_raw()
            .await
            .map_err(|e| StorageError::ReadError(e.to_string()))?;
        let mut entries =
            parse_entries(raw.as_deref()).map_err(|e| StorageError::ReadError(e.to_string()))?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        // Read failures abort; only unparseable content is replaced
        let raw = self.read_raw().await.map_err(|e| {
            StorageError::WriteError(format!("cannot read existing {}: {}", self.path.display(), e))
        })?;
        let mut entries = parse_entries(raw.as_deref()).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "replacing corrupt storage file");
            Entries::new()
        });
        entries.insert(key.to_string(), value.to_string());

        let content = serde_json::to_string_pretty(&entries)
            .map_err(|e| StorageError::WriteError(e.to_string()))?;
        atomic_file::replace(&self.path, content.as_bytes())
            .await
            .map_err(|e| StorageError::WriteError(e.to_string()))
    }
}
