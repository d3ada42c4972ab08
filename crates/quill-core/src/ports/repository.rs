use async_trait::async_trait;

use crate::domain::{Author, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity: insert when it has no ID yet, update otherwise.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Author repository with exact-match lookups for the unique columns.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, i32> {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError>;

    async fn find_by_phone_number(&self, phone_number: &str) -> Result<Option<Author>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    async fn find_by_category(&self, category: &str) -> Result<Vec<Post>, RepoError>;
}
