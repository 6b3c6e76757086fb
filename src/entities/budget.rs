//! Budget entity - a spending cap for a category or bucket over a period.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget database model
#[derive(Clone, Debug, PartialEq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Wallet this record is scoped to
    pub wallet_id: Option<String>,
    /// Category the cap applies to
    pub category: Option<String>,
    /// Bucket the cap applies to
    pub bucket: Option<String>,
    /// Cap for one period
    pub amount: f64,
    /// Currency code
    pub currency: String,
    /// `weekly`, `monthly` or `yearly`
    pub period: String,
    /// First day the budget applies
    pub start_date: Option<Date>,
    /// Last day the budget applies, on or after `start_date`
    pub end_date: Option<Date>,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Budgets reference categories and buckets by id without a declared relation
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
