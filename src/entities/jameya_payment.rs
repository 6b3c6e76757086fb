//! Jameya payment entity - the owner's contribution for one period of a circle.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Jameya payment database model
#[derive(Clone, Debug, PartialEq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jameya_payments")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Parent circle id
    pub jameya: String,
    /// Period this payment covers (1-based)
    pub period_no: i32,
    /// Amount paid
    pub amount: f64,
    /// Day of payment
    pub paid_on: Option<Date>,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between `JameyaPayment` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each payment belongs to one circle
    #[sea_orm(
        belongs_to = "super::jameya::Entity",
        from = "Column::Jameya",
        to = "super::jameya::Column::Id"
    )]
    Jameya,
}

impl Related<super::jameya::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Jameya.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
