//! Write services - the assignment path from caller input to the record store.
//!
//! Every field goes through its rule from the [`Field`](crate::validation::Field)
//! table before the record is handed to a repository.

mod author;
mod post;

pub use author::{AuthorChanges, AuthorDraft, AuthorService};
pub use post::{PostChanges, PostDraft, PostService};
