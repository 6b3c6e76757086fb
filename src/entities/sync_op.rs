//! Sync op entity - an operation queued by an offline client.
//!
//! The client generates the op id (`client_id`), which becomes the record
//! id so replays of the same op collide instead of duplicating.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sync op database model
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sync_ops")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Record type label the op targets
    pub ref_doctype: String,
    /// Target record id, required for updates and deletes
    pub ref_id: Option<String>,
    /// `create`, `update` or `delete`
    pub op: String,
    /// JSON body of the op
    pub payload: String,
    /// `pending`, `applied` or `failed`
    pub status: String,
    /// Failure reason when `failed`
    pub error: Option<String>,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Sync operations reference their target dynamically
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
