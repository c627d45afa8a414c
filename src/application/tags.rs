//! Durable tag record access

use thiserror::Error;
use tracing::warn;

use crate::domain::error::TagSetError;
use crate::domain::tags::TagSet;

use super::ports::{KeyValueStore, StorageError};

/// Errors from persisting a tag set
#[derive(Debug, Error)]
pub enum TagPersistError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] TagSetError),

    #[error("Storage failed: {0}")]
    Storage(#[from] StorageError),
}

/// Reads and replaces the single stored tag record.
pub struct TagRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TagRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored tags.
    ///
    /// A missing, unreadable, or malformed record yields an empty set.
    pub async fn load(&self) -> TagSet {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return TagSet::empty(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored tags, starting empty");
                return TagSet::empty();
            }
        };

        TagSet::parse(&raw).unwrap_or_else(|e| {
            warn!(key = %self.key, error = %e, "stored tags are malformed, starting empty");
            TagSet::empty()
        })
    }

    /// Replace the stored tags with `tags`.
    ///
    /// Serialization happens before the store is touched, so a failure
    /// leaves the previous record in place.
    pub async fn save(&self, tags: &TagSet) -> Result<(), TagPersistError> {
        let raw = tags.to_json()?;
        self.store.set(&self.key, &raw).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn load_defaults_to_empty_when_never_written() {
        let repo = TagRepository::new(MemoryStore::new(), "tags");
        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn load_defaults_to_empty_on_malformed_record() {
        let store = MemoryStore::new();
        store.set("tags", "{not json").await.unwrap();
        let repo = TagRepository::new(store, "tags");
        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_replaces_whole_record() {
        let repo = TagRepository::new(MemoryStore::new(), "tags");
        let first = TagSet::new(vec![json!("a"), json!("b")]);
        let second = TagSet::new(vec![json!("c")]);

        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        assert_eq!(repo.load().await, second);
        assert_eq!(
            repo.store().get("tags").await.unwrap(),
            Some(r#"["c"]"#.to_string())
        );
    }

    #[tokio::test]
    async fn uses_configured_key() {
        let repo = TagRepository::new(MemoryStore::new(), "labels");
        repo.save(&TagSet::new(vec![json!(1)])).await.unwrap();
        assert!(repo.store().get("tags").await.unwrap().is_none());
        assert_eq!(repo.key(), "labels");
        assert_eq!(repo.load().await.len(), 1);
    }
}
