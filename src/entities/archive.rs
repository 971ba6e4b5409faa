//! Archive entity - one saved record of the archive.
//!
//! The table has no declared key; rows are addressed through `SQLite`'s
//! implicit `rowid`, which is never selected by the store queries.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Archive database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Archive")]
pub struct Model {
    /// Implicit `SQLite` row id
    #[sea_orm(primary_key, column_name = "rowid")]
    pub row_id: i64,
    /// Date token the entry is filed under (not a calendar date)
    #[sea_orm(column_name = "Date")]
    pub date: String,
    /// Name token of the entry
    #[sea_orm(column_name = "Name")]
    pub name: String,
    /// Free-form archived text
    #[sea_orm(column_name = "Message")]
    pub message: String,
}

/// Archive entries have no relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
