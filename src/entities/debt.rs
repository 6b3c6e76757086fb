//! Debt entity - money owed to or by a counterparty.
//!
//! Installments split the principal into scheduled repayments; their sum
//! may never exceed the principal.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Debt database model
#[derive(Clone, Debug, PartialEq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "debts")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Wallet this debt is scoped to
    pub wallet_id: Option<String>,
    /// Person or institution on the other side
    pub counterparty: String,
    /// `i_owe` or `owed_to_me`
    pub direction: String,
    /// Original amount
    pub principal: f64,
    /// Currency code
    pub currency: String,
    /// When the whole debt falls due
    pub due_date: Option<Date>,
    /// `open` or `settled`
    pub status: String,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Debt and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One debt has many installments
    #[sea_orm(has_many = "super::debt_installment::Entity")]
    Installments,
}

impl Related<super::debt_installment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Installments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
