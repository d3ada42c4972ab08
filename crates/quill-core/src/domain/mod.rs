//! Domain entities - the persisted records.

mod author;

mod post;

pub use author::Author;
pub use post::Post;
