use std::sync::Arc;

use serde::Deserialize;

use crate::domain::Author;
use crate::error::{DomainError, RepoError};
use crate::ports::AuthorRepository;
use crate::validation::{Field, ValidationError, check};

/// Caller-supplied values for a new author. Absent fields are `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorDraft {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

/// Fields to reassign on an existing author. `None` leaves a field as is;
/// `phone_number: Some(None)` clears the phone number.
#[derive(Debug, Clone, Default)]
pub struct AuthorChanges {
    pub name: Option<String>,
    pub phone_number: Option<Option<String>>,
}

/// Creates and updates authors, enforcing name and phone number uniqueness.
///
/// The lookup before save is a point-in-time check that gives a precise error.
/// Concurrent writers are caught by the store's unique constraint, which
/// `persist` maps back to the same error.
#[derive(Clone)]
pub struct AuthorService {
    repo: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, draft: AuthorDraft) -> Result<Author, DomainError> {
        let name = draft.name.unwrap_or_default();
        self.admit(None, Field::AuthorName, Some(name.as_str())).await?;
        self.admit(None, Field::AuthorPhoneNumber, draft.phone_number.as_deref())
            .await?;

        let author = Author::new(name, draft.phone_number)?;
        self.persist(author).await
    }

    pub async fn update(&self, id: i32, changes: AuthorChanges) -> Result<Author, DomainError> {
        let mut author = self.get(id).await?;

        if let Some(name) = changes.name {
            self.admit(Some(id), Field::AuthorName, Some(name.as_str())).await?;
            author.set_name(name)?;
        }
        if let Some(phone_number) = changes.phone_number {
            self.admit(Some(id), Field::AuthorPhoneNumber, phone_number.as_deref())
                .await?;
            author.set_phone_number(phone_number)?;
        }

        self.persist(author).await
    }

    pub async fn get(&self, id: i32) -> Result<Author, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Author",
                id,
            })
    }

    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "Author",
                id,
            },
            other => other.into(),
        })
    }

    /// Run the field rule, then reject the value if another author holds it.
    async fn admit(
        &self,
        id: Option<i32>,
        field: Field,
        value: Option<&str>,
    ) -> Result<(), DomainError> {
        check(field, value)?;

        let Some(value) = value else {
            return Ok(());
        };
        let holder = match field {
            Field::AuthorName => self.repo.find_by_name(value).await?,
            Field::AuthorPhoneNumber => self.repo.find_by_phone_number(value).await?,
            _ => None,
        };

        if holder.is_some_and(|other| other.id() != id) {
            return Err(ValidationError::duplicate(field).into());
        }
        Ok(())
    }

    async fn persist(&self, author: Author) -> Result<Author, DomainError> {
        match self.repo.save(author).await {
            Ok(saved) => Ok(saved),
            Err(RepoError::Constraint(detail)) => {
                Err(ValidationError::duplicate(violated_column(&detail)).into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Which unique author column a storage constraint message refers to.
fn violated_column(detail: &str) -> Field {
    if detail.contains(Field::AuthorPhoneNumber.column()) {
        Field::AuthorPhoneNumber
    } else {
        Field::AuthorName
    }
}
