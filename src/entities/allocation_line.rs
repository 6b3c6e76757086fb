//! Allocation line entity - the share of a rule routed to one bucket.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Allocation line database model
#[derive(Clone, Debug, PartialEq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "allocation_lines")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Parent rule id
    pub rule: String,
    /// Target bucket id, unique per rule
    pub bucket: String,
    /// Share in percent, 1 to 100
    pub percent: f64,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between `AllocationLine` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line belongs to one rule
    #[sea_orm(
        belongs_to = "super::allocation_rule::Entity",
        from = "Column::Rule",
        to = "super::allocation_rule::Column::Id"
    )]
    Rule,
    /// Each line feeds one bucket
    #[sea_orm(
        belongs_to = "super::bucket::Entity",
        from = "Column::Bucket",
        to = "super::bucket::Column::Id"
    )]
    Bucket,
}

impl Related<super::allocation_rule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rule.def()
    }
}

impl Related<super::bucket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bucket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
