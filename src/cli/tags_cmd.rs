//! Tags command handler

use std::path::Path;

use crate::application::ports::KeyValueStore;
use crate::application::{TagPersistError, TagRepository};
use crate::domain::tags::TagSet;

use super::args::TagsAction;
use super::presenter::Presenter;

/// Handle tags subcommand
pub async fn handle_tags_command<S: KeyValueStore>(
    action: TagsAction,
    repo: &TagRepository<S>,
    storage_path: &Path,
    presenter: &Presenter,
) -> Result<(), TagPersistError> {
    match action {
        TagsAction::Show => {
            let tags = repo.load().await;
            presenter.output(&render(&tags));
        }
        TagsAction::Clear => {
            repo.save(&TagSet::empty()).await?;
            presenter.success(&format!("Cleared tags under key '{}'", repo.key()));
        }
        TagsAction::Path => presenter.output(&storage_path.to_string_lossy()),
    }
    Ok(())
}

fn render(tags: &TagSet) -> String {
    serde_json::to_string_pretty(tags).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;
    use serde_json::json;

    #[test]
    fn render_pretty_prints() {
        assert_eq!(render(&TagSet::empty()), "[]");
        assert!(render(&TagSet::new(vec![json!({"a": 1})])).contains("\"a\": 1"));
    }

    #[tokio::test]
    async fn clear_writes_empty_record() {
        let repo = TagRepository::new(MemoryStore::new(), "tags");
        repo.save(&TagSet::new(vec![json!("x")])).await.unwrap();

        handle_tags_command(TagsAction::Clear, &repo, Path::new("mem"), &Presenter::new())
            .await
            .unwrap();

        assert_eq!(repo.store().get("tags").await.unwrap(), Some("[]".to_string()));
    }
}
