//! The per-field predicates. Lengths are counted in characters, not bytes.

use super::{Field, ValidationError, Violation};

/// Phrases of which a post title must contain at least one.
pub const CLICKBAIT_PHRASES: &[&str] = &["Won't Believe", "Secret", "Top", "Guess"];

/// Accepted post categories.
pub const ALLOWED_CATEGORIES: &[&str] = &["Fiction", "Non-Fiction"];

pub const MIN_CONTENT_CHARS: usize = 250;
pub const MAX_SUMMARY_CHARS: usize = 250;
pub const PHONE_DIGITS: usize = 10;

fn required(field: Field, value: Option<&str>) -> Result<&str, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::new(field, Violation::Missing)),
    }
}

pub fn author_name(value: Option<&str>) -> Result<(), ValidationError> {
    required(Field::AuthorName, value).map(|_| ())
}

/// An absent phone number is accepted; a present one must be ten ASCII digits.
pub fn author_phone_number(value: Option<&str>) -> Result<(), ValidationError> {
    let Some(phone) = value else {
        return Ok(());
    };

    let all_digits = phone.chars().all(|c| c.is_ascii_digit());
    if !all_digits || phone.chars().count() != PHONE_DIGITS {
        return Err(ValidationError::new(
            Field::AuthorPhoneNumber,
            Violation::NotTenDigits,
        ));
    }
    Ok(())
}

pub fn post_title(value: Option<&str>) -> Result<(), ValidationError> {
    let title = required(Field::PostTitle, value)?;
    if !CLICKBAIT_PHRASES.iter().any(|phrase| title.contains(phrase)) {
        return Err(ValidationError::new(
            Field::PostTitle,
            Violation::MissingPhrase {
                phrases: CLICKBAIT_PHRASES,
            },
        ));
    }
    Ok(())
}

pub fn post_content(value: Option<&str>) -> Result<(), ValidationError> {
    let content = required(Field::PostContent, value)?;
    let actual = content.chars().count();
    if actual < MIN_CONTENT_CHARS {
        return Err(ValidationError::new(
            Field::PostContent,
            Violation::TooShort {
                min: MIN_CONTENT_CHARS,
                actual,
            },
        ));
    }
    Ok(())
}

pub fn post_summary(value: Option<&str>) -> Result<(), ValidationError> {
    let summary = required(Field::PostSummary, value)?;
    let actual = summary.chars().count();
    if actual > MAX_SUMMARY_CHARS {
        return Err(ValidationError::new(
            Field::PostSummary,
            Violation::TooLong {
                max: MAX_SUMMARY_CHARS,
                actual,
            },
        ));
    }
    Ok(())
}

/// Any supplied string outside the allowed set, the empty string included, is
/// `NotAllowed`. Only an absent category is `Missing`.
pub fn post_category(value: Option<&str>) -> Result<(), ValidationError> {
    let Some(category) = value else {
        return Err(ValidationError::new(Field::PostCategory, Violation::Missing));
    };

    if !ALLOWED_CATEGORIES.contains(&category) {
        return Err(ValidationError::new(
            Field::PostCategory,
            Violation::NotAllowed {
                value: category.to_string(),
                allowed: ALLOWED_CATEGORIES,
            },
        ));
    }
    Ok(())
}
