//! FX rate entity - a user-maintained conversion rate between two currencies.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// FX rate database model. One unit of `from_currency` buys `rate` units of `to_currency`.
#[derive(Clone, Debug, PartialEq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fx_rates")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Source currency code
    pub from_currency: String,
    /// Target currency code
    pub to_currency: String,
    /// Units of `to_currency` per unit of `from_currency`
    pub rate: f64,
    /// Day the rate was quoted
    pub as_of: Option<Date>,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// FX rates stand alone
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
