//! Field-level validation.
//!
//! Every validated column has a [`Field`] identifier, and [`Field::rule`] maps it
//! to a named pure predicate. Entity setters and the write services go through
//! [`check`] so the right predicate runs for whichever field is being assigned.

mod rules;

use std::fmt;

use thiserror::Error;

pub use rules::{
    ALLOWED_CATEGORIES, CLICKBAIT_PHRASES, MAX_SUMMARY_CHARS, MIN_CONTENT_CHARS, PHONE_DIGITS,
    author_name, author_phone_number, post_category, post_content, post_summary, post_title,
};

/// A pure validation predicate over a single incoming value.
///
/// `None` means the value was not supplied at all.
pub type Rule = fn(Option<&str>) -> Result<(), ValidationError>;

/// A validated column of a persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AuthorName,
    AuthorPhoneNumber,
    PostTitle,
    PostContent,
    PostSummary,
    PostCategory,
}

impl Field {
    /// Author fields in assignment order.
    pub const AUTHOR: [Field; 2] = [Field::AuthorName, Field::AuthorPhoneNumber];

    /// Post fields in assignment order.
    pub const POST: [Field; 4] = [
        Field::PostTitle,
        Field::PostContent,
        Field::PostSummary,
        Field::PostCategory,
    ];

    /// The predicate guarding this field.
    pub fn rule(self) -> Rule {
        match self {
            Field::AuthorName => author_name,
            Field::AuthorPhoneNumber => author_phone_number,
            Field::PostTitle => post_title,
            Field::PostContent => post_content,
            Field::PostSummary => post_summary,
            Field::PostCategory => post_category,
        }
    }

    /// Human-readable record type.
    pub fn entity(self) -> &'static str {
        match self {
            Field::AuthorName | Field::AuthorPhoneNumber => "Author",
            _ => "Post",
        }
    }

    /// Column name as stored.
    pub fn column(self) -> &'static str {
        match self {
            Field::AuthorName => "name",
            Field::AuthorPhoneNumber => "phone_number",
            Field::PostTitle => "title",
            Field::PostContent => "content",
            Field::PostSummary => "summary",
            Field::PostCategory => "category",
        }
    }

    /// Whether the column carries a uniqueness constraint.
    pub fn is_unique(self) -> bool {
        matches!(self, Field::AuthorName | Field::AuthorPhoneNumber)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = match self {
            Field::AuthorPhoneNumber => "phone number",
            other => other.column(),
        };
        write!(f, "{} {}", self.entity(), column)
    }
}

/// Why a value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Absent or empty.
    Missing,
    /// Another record already holds the value.
    Duplicate,
    /// Not exactly ten decimal digits.
    NotTenDigits,
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
    /// Not one of the enumerated values.
    NotAllowed {
        value: String,
        allowed: &'static [&'static str],
    },
    /// None of the required phrases appear in the value.
    MissingPhrase { phrases: &'static [&'static str] },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Missing => f.write_str("is required"),
            Violation::Duplicate => f.write_str("must be unique"),
            Violation::NotTenDigits => f.write_str("must be exactly ten digits"),
            Violation::TooShort { min, actual } => {
                write!(f, "must be at least {min} characters long (got {actual})")
            }
            Violation::TooLong { max, actual } => {
                write!(f, "must be at most {max} characters long (got {actual})")
            }
            Violation::NotAllowed { value, allowed } => {
                write!(f, "must be one of {} (got {value:?})", quoted(allowed))
            }
            Violation::MissingPhrase { phrases } => {
                write!(f, "must contain one of {}", quoted(phrases))
            }
        }
    }
}

fn quoted(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A rejected field assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {violation}")]
pub struct ValidationError {
    pub field: Field,
    pub violation: Violation,
}

impl ValidationError {
    pub fn new(field: Field, violation: Violation) -> Self {
        Self { field, violation }
    }

    pub fn duplicate(field: Field) -> Self {
        Self::new(field, Violation::Duplicate)
    }
}

/// Run the rule registered for `field` against `value`.
pub fn check(field: Field, value: Option<&str>) -> Result<(), ValidationError> {
    (field.rule())(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = ValidationError::new(Field::AuthorName, Violation::Missing);
        assert_eq!(err.to_string(), "Author name is required");

        let err = ValidationError::duplicate(Field::AuthorPhoneNumber);
        assert_eq!(err.to_string(), "Author phone number must be unique");

        let err = ValidationError::new(
            Field::PostContent,
            Violation::TooShort {
                min: 250,
                actual: 12,
            },
        );
        assert_eq!(
            err.to_string(),
            "Post content must be at least 250 characters long (got 12)"
        );
    }

    #[test]
    fn test_category_message_lists_allowed_values() {
        let err = check(Field::PostCategory, Some("Poetry")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Post category must be one of 'Fiction', 'Non-Fiction' (got \"Poetry\")"
        );
    }

    #[test]
    fn test_rule_table_dispatches_per_field() {
        let long = "x".repeat(300);

        // The same value is judged by whichever predicate the field maps to.
        assert!(check(Field::PostContent, Some(long.as_str())).is_ok());
        assert_eq!(
            check(Field::PostSummary, Some(long.as_str())).unwrap_err().violation,
            Violation::TooLong {
                max: 250,
                actual: 300
            }
        );
        assert_eq!(
            check(Field::PostTitle, Some(long.as_str())).unwrap_err().field,
            Field::PostTitle
        );
    }

    #[test]
    fn test_only_author_columns_are_unique() {
        let unique: Vec<Field> = Field::AUTHOR
            .iter()
            .chain(Field::POST.iter())
            .copied()
            .filter(|f| f.is_unique())
            .collect();
        assert_eq!(unique, vec![Field::AuthorName, Field::AuthorPhoneNumber]);
    }
}
