//! Record store selection - Postgres when configured, in-memory otherwise.

use std::sync::Arc;

use quill_core::ports::{AuthorRepository, PostRepository};
use quill_infra::database::DatabaseConfig;
use quill_infra::{InMemoryAuthorRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use quill_infra::{PostgresAuthorRepository, PostgresPostRepository};

/// Repositories the seed run writes through.
#[derive(Clone)]
pub struct Store {
    pub authors: Arc<dyn AuthorRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl Store {
    fn in_memory() -> Self {
        Self {
            authors: Arc::new(InMemoryAuthorRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
        }
    }

    /// Build the store with appropriate implementations.
    pub async fn open(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                // One pool per repository; `DbConn` is not `Clone` in every build.
                let authors = quill_infra::database::connect(config).await?;
                let posts = quill_infra::database::connect(config).await?;
                return Ok(Self {
                    authors: Arc::new(PostgresAuthorRepository::new(authors)),
                    posts: Arc::new(PostgresPostRepository::new(posts)),
                });
            }
            tracing::warn!("DATABASE_URL not set. Seeding the in-memory store.");
        }

        #[cfg(not(feature = "postgres"))]
        if db_config.is_some() {
            tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
        }

        Ok(Self::in_memory())
    }
}
