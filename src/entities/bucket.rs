//! Bucket entity - an earmarked pot of money (envelope) fed by allocation rules.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bucket database model
#[derive(Clone, Debug, PartialEq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "buckets")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Wallet this record is scoped to
    pub wallet_id: Option<String>,
    /// Display name
    pub name: String,
    /// Amount the user wants to accumulate, zero when open-ended
    pub target_amount: f64,
    /// Display colour
    pub color: Option<String>,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Bucket and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Allocation lines routing money into this bucket
    #[sea_orm(has_many = "super::allocation_line::Entity")]
    AllocationLines,
}

impl Related<super::allocation_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AllocationLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
