//! # Quill Infrastructure
//!
//! Record store implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL record store via SeaORM
//! - `minimal` - No external dependencies, in-memory store only

pub mod database;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryAuthorRepository, InMemoryPostRepository};

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::{PostgresAuthorRepository, PostgresPostRepository};
