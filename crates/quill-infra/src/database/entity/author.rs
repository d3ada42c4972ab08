//! Author entity for SeaORM.
//!
//! `name` and `phone_number` are unique columns, so the store rejects duplicates
//! even when two writers pass the service-level lookup at the same time.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub phone_number: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Author.
impl From<Model> for quill_core::domain::Author {
    fn from(model: Model) -> Self {
        Self::hydrate(
            model.id,
            model.name,
            model.phone_number,
            model.created_at.into(),
            model.updated_at.into(),
        )
    }
}

/// Conversion from Domain Author to SeaORM ActiveModel.
/// An unsaved author leaves `id` unset so the database assigns it.
impl From<quill_core::domain::Author> for ActiveModel {
    fn from(author: quill_core::domain::Author) -> Self {
        Self {
            id: author.id().map_or(NotSet, Set),
            name: Set(author.name().to_owned()),
            phone_number: Set(author.phone_number().map(str::to_owned)),
            created_at: Set(author.created_at().into()),
            updated_at: Set(author.updated_at().into()),
        }
    }
}
