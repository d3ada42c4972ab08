//! # Quill Core
//!
//! The domain layer for Quill author and post records.
//! This crate holds the entities, their field rules and the write services,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

pub use error::DomainError;
pub use validation::{Field, ValidationError, Violation};
