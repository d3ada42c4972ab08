use std::sync::Arc;

use serde::Deserialize;

use crate::domain::Post;
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;
use crate::validation::{Field, ValidationError, check};

/// Caller-supplied values for a new post. Absent fields are `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
}

/// Fields to reassign on an existing post. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
}

/// Creates and updates posts. Post rules need no store lookups.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let title = required(Field::PostTitle, draft.title)?;
        let content = required(Field::PostContent, draft.content)?;
        let summary = required(Field::PostSummary, draft.summary)?;
        let category = required(Field::PostCategory, draft.category)?;

        let post = Post::new(title, content, summary, category)?;
        Ok(self.repo.save(post).await?)
    }

    pub async fn update(&self, id: i32, changes: PostChanges) -> Result<Post, DomainError> {
        let mut post = self.get(id).await?;

        if let Some(title) = changes.title {
            post.set_title(title)?;
        }
        if let Some(content) = changes.content {
            post.set_content(content)?;
        }
        if let Some(summary) = changes.summary {
            post.set_summary(summary)?;
        }
        if let Some(category) = changes.category {
            post.set_category(category)?;
        }

        Ok(self.repo.save(post).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Post>, DomainError> {
        check(Field::PostCategory, Some(category))?;
        Ok(self.repo.find_by_category(category).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "Post",
                id,
            },
            other => other.into(),
        })
    }
}

/// Run the field rule on a possibly absent value and unwrap it.
fn required(field: Field, value: Option<String>) -> Result<String, ValidationError> {
    check(field, value.as_deref())?;
    Ok(value.unwrap_or_default())
}
