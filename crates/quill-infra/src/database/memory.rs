//! In-memory record store - used when no database is configured.
//!
//! Mirrors the Postgres schema: ids are assigned on first save and the author
//! `name` / `phone_number` columns are unique. The constraint check runs under
//! the write lock, so it holds even when the service-level lookup races.
//! Note: Data is lost on process restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Author, Post};
use quill_core::error::RepoError;
use quill_core::ports::{AuthorRepository, BaseRepository, PostRepository};

/// Rows keyed by id, plus the next id to hand out.
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// The id a save should store under: existing ids must already be present.
    fn slot(&mut self, id: Option<i32>) -> Result<i32, RepoError> {
        match id {
            Some(id) if self.rows.contains_key(&id) => Ok(id),
            Some(_) => Err(RepoError::NotFound),
            None => {
                let id = self.next_id;
                self.next_id += 1;
                Ok(id)
            }
        }
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| pred(row)).cloned()
    }

    fn remove(&mut self, id: i32) -> Result<(), RepoError> {
        self.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

fn unique_violation(constraint: &str) -> RepoError {
    RepoError::Constraint(format!(
        "duplicate key value violates unique constraint \"{constraint}\""
    ))
}

/// In-memory author repository.
pub struct InMemoryAuthorRepository {
    table: RwLock<Table<Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Author, i32> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, author: Author) -> Result<Author, RepoError> {
        let mut table = self.table.write().await;

        let clashes = |other: &Author| {
            other.id() != author.id()
                && (other.name() == author.name()
                    || (author.phone_number().is_some()
                        && other.phone_number() == author.phone_number()))
        };
        if let Some(other) = table.find(clashes) {
            let constraint = if other.name() == author.name() {
                "authors_name_key"
            } else {
                "authors_phone_number_key"
            };
            tracing::debug!(constraint, "Rejecting duplicate author");
            return Err(unique_violation(constraint));
        }

        let id = table.slot(author.id())?;
        let stored = Author::hydrate(
            id,
            author.name().to_owned(),
            author.phone_number().map(str::to_owned),
            author.created_at(),
            author.updated_at(),
        );
        table.rows.insert(id, stored.clone());

        tracing::debug!(author_id = id, "Author saved");
        Ok(stored)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.table.write().await.remove(id)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        Ok(self.table.read().await.find(|a| a.name() == name))
    }

    async fn find_by_phone_number(&self, phone_number: &str) -> Result<Option<Author>, RepoError> {
        Ok(self
            .table
            .read()
            .await
            .find(|a| a.phone_number() == Some(phone_number)))
    }
}

/// In-memory post repository.
pub struct InMemoryPostRepository {
    table: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let id = table.slot(post.id())?;
        let stored = Post::hydrate(
            id,
            post.title().to_owned(),
            post.content().to_owned(),
            post.summary().to_owned(),
            post.category().to_owned(),
            post.created_at(),
            post.updated_at(),
        );
        table.rows.insert(id, stored.clone());

        tracing::debug!(post_id = id, "Post saved");
        Ok(stored)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.table.write().await.remove(id)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_category(&self, category: &str) -> Result<Vec<Post>, RepoError> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|p| p.category() == category)
            .cloned()
            .collect())
    }
}
