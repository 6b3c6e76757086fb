//! Custom currency entity - user-defined currency codes (gold grams, points, ...).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Custom currency database model
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "custom_currencies")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Three to five uppercase letters, unique per user
    pub code: String,
    /// Display name
    pub currency_name: String,
    /// Display symbol
    pub symbol: Option<String>,
    /// Minor unit digits, 0 to 4
    pub decimals: i32,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Custom currencies are referenced by code, not by relation
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
