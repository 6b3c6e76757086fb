//! Wallet entity - the top-level container every scoped record belongs to.
//!
//! A user may own several wallets; exactly one is expected to be flagged
//! `is_default`, which patches use when backfilling `wallet_id`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Wallet database model
#[derive(Clone, Debug, PartialEq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wallets")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Display name (e.g. "Household", "Travel")
    pub name: String,
    /// ISO or custom currency code balances are reported in
    pub base_currency: String,
    /// Whether this wallet receives records that carry no `wallet_id`
    pub is_default: bool,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Wallets are referenced by `wallet_id` columns without a declared relation
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
