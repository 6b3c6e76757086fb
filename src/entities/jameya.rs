//! Jameya entity - a rotating savings circle.
//!
//! Each of `members_count` members pays `installment_amount` every period and
//! one member collects the whole pot per period. `my_turn` is the period in
//! which the owning user collects.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Jameya database model
#[derive(Clone, Debug, PartialEq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jameyas")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Wallet this circle is scoped to
    pub wallet_id: Option<String>,
    /// Display name
    pub name: String,
    /// Amount each member pays per period
    pub installment_amount: f64,
    /// Number of members, which is also the number of periods
    pub members_count: i32,
    /// Period in which the owner collects the pot (1-based)
    pub my_turn: i32,
    /// Currency code
    pub currency: String,
    /// First period start
    pub start_date: Option<Date>,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Jameya and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One circle has many payments
    #[sea_orm(has_many = "super::jameya_payment::Entity")]
    Payments,
}

impl Related<super::jameya_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
