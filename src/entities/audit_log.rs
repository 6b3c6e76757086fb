//! Audit log entity - one row per insert, update or delete of an audited record.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Audit log database model
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "audit_logs")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// User whose session performed the action
    pub user: String,
    /// Record type label of the audited record
    pub ref_doctype: String,
    /// Id of the audited record
    pub ref_id: String,
    /// `insert`, `update` or `delete`
    pub action: String,
    /// JSON snapshot of the record after the action
    pub data: Option<String>,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// `AuditLog` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
