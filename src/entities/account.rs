//! Account entity - a place money lives (cash box, bank account, card).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account database model
#[derive(Clone, Debug, PartialEq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Wallet this account is scoped to
    pub wallet_id: Option<String>,
    /// Display name
    pub name: String,
    /// One of `cash`, `bank`, `card`, `savings`, `other`
    pub account_type: String,
    /// Currency code the account is held in
    pub currency: String,
    /// Balance at the time the account was registered
    pub opening_balance: f64,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Account and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One account has many transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
