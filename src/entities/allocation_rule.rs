//! Allocation rule entity - splits incoming money across buckets by percentage.
//!
//! The split itself lives in allocation lines; the sum of a rule's active
//! lines never exceeds 100 percent.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Allocation rule database model
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "allocation_rules")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Wallet this rule is scoped to
    pub wallet_id: Option<String>,
    /// Display name
    pub rule_name: String,
    /// Whether the rule is applied to new income
    pub is_active: bool,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between `AllocationRule` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One rule has many lines
    #[sea_orm(has_many = "super::allocation_line::Entity")]
    Lines,
}

impl Related<super::allocation_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
