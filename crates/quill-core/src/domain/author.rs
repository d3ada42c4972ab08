use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::validation::{Field, ValidationError, check};

/// Author entity - a writer with a unique display name and optional phone number.
///
/// Validated fields are private: every assignment goes through the field's rule.
/// Uniqueness against other stored authors is enforced by
/// [`AuthorService`](crate::services::AuthorService), not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: Option<i32>,
    name: String,
    phone_number: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Author {
    /// Create a new, unsaved author. Fields are checked in assignment order.
    pub fn new(name: String, phone_number: Option<String>) -> Result<Self, ValidationError> {
        check(Field::AuthorName, Some(name.as_str()))?;
        check(Field::AuthorPhoneNumber, phone_number.as_deref())?;

        let now = Utc::now();
        Ok(Self {
            id: None,
            name,
            phone_number,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a stored author without re-running the field rules.
    pub fn hydrate(
        id: i32,
        name: String,
        phone_number: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            phone_number,
            created_at,
            updated_at,
        }
    }

    /// Identity assigned by the store; `None` until first saved.
    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_name(&mut self, name: String) -> Result<(), ValidationError> {
        check(Field::AuthorName, Some(name.as_str()))?;
        self.name = name;
        self.touch();
        Ok(())
    }

    pub fn set_phone_number(
        &mut self,
        phone_number: Option<String>,
    ) -> Result<(), ValidationError> {
        check(Field::AuthorPhoneNumber, phone_number.as_deref())?;
        self.phone_number = phone_number;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}
