use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::validation::{Field, ValidationError, check};

/// Post entity - an article with a clickbait title, long content and a short summary.
///
/// There is no link to [`Author`](super::Author).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    id: Option<i32>,
    title: String,
    content: String,
    summary: String,
    category: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new, unsaved post. The first failing field aborts construction.
    pub fn new(
        title: String,
        content: String,
        summary: String,
        category: String,
    ) -> Result<Self, ValidationError> {
        check(Field::PostTitle, Some(title.as_str()))?;
        check(Field::PostContent, Some(content.as_str()))?;
        check(Field::PostSummary, Some(summary.as_str()))?;
        check(Field::PostCategory, Some(category.as_str()))?;

        let now = Utc::now();
        Ok(Self {
            id: None,
            title,
            content,
            summary,
            category,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a stored post without re-running the field rules.
    pub fn hydrate(
        id: i32,
        title: String,
        content: String,
        summary: String,
        category: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            title,
            content,
            summary,
            category,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_title(&mut self, title: String) -> Result<(), ValidationError> {
        check(Field::PostTitle, Some(title.as_str()))?;
        self.title = title;
        self.touch();
        Ok(())
    }

    pub fn set_content(&mut self, content: String) -> Result<(), ValidationError> {
        check(Field::PostContent, Some(content.as_str()))?;
        self.content = content;
        self.touch();
        Ok(())
    }

    pub fn set_summary(&mut self, summary: String) -> Result<(), ValidationError> {
        check(Field::PostSummary, Some(summary.as_str()))?;
        self.summary = summary;
        self.touch();
        Ok(())
    }

    pub fn set_category(&mut self, category: String) -> Result<(), ValidationError> {
        check(Field::PostCategory, Some(category.as_str()))?;
        self.category = category;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}
