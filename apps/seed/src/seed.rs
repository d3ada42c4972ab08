//! Seed file loading.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use quill_core::DomainError;
use quill_core::services::{AuthorDraft, AuthorService, PostDraft, PostService};

use crate::store::Store;

/// Seed file layout: `{ "authors": [...], "posts": [...] }`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedFile {
    pub authors: Vec<AuthorDraft>,
    pub posts: Vec<PostDraft>,
}

impl SeedFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path.display()))
    }
}

/// Outcome counts of a seed run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub authors_created: usize,
    pub authors_rejected: usize,
    pub posts_created: usize,
    pub posts_rejected: usize,
}

/// Create every record through the write services. Validation failures are
/// logged and counted; store failures abort the run.
pub async fn run(store: &Store, seed: SeedFile) -> anyhow::Result<SeedReport> {
    let authors = AuthorService::new(store.authors.clone());
    let posts = PostService::new(store.posts.clone());
    let mut report = SeedReport::default();

    for (index, draft) in seed.authors.into_iter().enumerate() {
        match authors.create(draft).await {
            Ok(author) => {
                tracing::info!(author_id = ?author.id(), name = %author.name(), "Author created");
                report.authors_created += 1;
            }
            Err(DomainError::Validation(reason)) => {
                tracing::warn!(index, field = %reason.field, %reason, "Author rejected");
                report.authors_rejected += 1;
            }
            Err(e) => return Err(e).context(format!("creating author #{index}")),
        }
    }

    for (index, draft) in seed.posts.into_iter().enumerate() {
        match posts.create(draft).await {
            Ok(post) => {
                tracing::info!(post_id = ?post.id(), title = %post.title(), "Post created");
                report.posts_created += 1;
            }
            Err(DomainError::Validation(reason)) => {
                tracing::warn!(index, field = %reason.field, %reason, "Post rejected");
                report.posts_rejected += 1;
            }
            Err(e) => return Err(e).context(format!("creating post #{index}")),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quill_core::ports::{AuthorRepository, PostRepository};
    use quill_infra::{InMemoryAuthorRepository, InMemoryPostRepository};

    use super::*;

    fn store() -> Store {
        Store {
            authors: Arc::new(InMemoryAuthorRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
        }
    }

    fn seed_json() -> String {
        let content = "x".repeat(300);
        serde_json::json!({
            "authors": [
                { "name": "Jane Doe", "phone_number": "5551234567" },
                { "name": "Jane Doe" },
                { "name": "Jane Doh", "phone_number": "5551234567" },
                { "name": "John Roe", "phone_number": "12345" },
                { "phone_number": "5559876543" },
                { "name": "Jane Doh" }
            ],
            "posts": [
                {
                    "title": "Top 10 Secrets Revealed",
                    "content": content,
                    "summary": "y".repeat(100),
                    "category": "Fiction"
                },
                {
                    "title": "A Normal Day",
                    "content": content,
                    "summary": "short",
                    "category": "Fiction"
                },
                {
                    "title": "Guess Who",
                    "content": content,
                    "summary": "short",
                    "category": ""
                }
            ]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_run_counts_accepted_and_rejected() {
        let store = store();
        let seed: SeedFile = serde_json::from_str(&seed_json()).unwrap();

        let report = run(&store, seed).await.unwrap();

        assert_eq!(
            report,
            SeedReport {
                authors_created: 2,
                authors_rejected: 4,
                posts_created: 1,
                posts_rejected: 2,
            }
        );

        let jane = store.authors.find_by_name("Jane Doe").await.unwrap().unwrap();
        assert_eq!(jane.phone_number(), Some("5551234567"));
        let fiction = store.posts.find_by_category("Fiction").await.unwrap();
        assert_eq!(fiction.len(), 1);
        assert_eq!(fiction[0].title(), "Top 10 Secrets Revealed");
    }

    #[tokio::test]
    async fn test_empty_sections_are_optional() {
        let seed: SeedFile = serde_json::from_str("{}").unwrap();
        let report = run(&store(), seed).await.unwrap();
        assert_eq!(report, SeedReport::default());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = SeedFile::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
