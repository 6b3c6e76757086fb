//! Attachment entity - a file (receipt, contract) linked to another record.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Attachment database model
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attachments")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Record type label of the parent (e.g. `"Transaction"`)
    pub parent_doctype: String,
    /// Id of the record the file belongs to
    pub parent_id: String,
    /// Original file name
    pub file_name: String,
    /// Where the file is stored
    pub file_url: String,
    /// Size in bytes
    pub file_size: i64,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Parents are resolved dynamically from `parent_doctype`
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
