//! Ports - trait definitions for the record store.
//! Infrastructure provides the implementations.

mod repository;

pub use repository::{AuthorRepository, BaseRepository, PostRepository};
