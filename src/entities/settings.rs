//! Settings entity - per-user preferences, keyed by the user itself.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Settings database model
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
#[serde(default)]
pub struct Model {
    /// Always equal to `user`
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Currency new records fall back to
    pub default_currency: String,
    /// Wallet preselected by clients
    pub default_wallet: Option<String>,
    /// First day of the week, 0 = Sunday
    pub week_start: i32,
    /// UI locale (e.g. `"en"`, `"ar"`)
    pub locale: Option<String>,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Settings has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
