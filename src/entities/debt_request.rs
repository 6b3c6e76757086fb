//! Debt request entity - asks another user to acknowledge a debt.
//!
//! Status moves from `pending` to `accepted` or `rejected`. Older clients
//! sent `declined`, which is stored as `rejected`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Debt request database model
#[derive(Clone, Debug, PartialEq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "debt_requests")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Requesting user
    pub user: String,
    /// Debt the request refers to, if already recorded
    pub debt: Option<String>,
    /// User asked to acknowledge the debt
    pub to_user: String,
    /// Requested amount
    pub amount: f64,
    /// Currency code
    pub currency: String,
    /// `pending`, `accepted` or `rejected`
    pub status: String,
    /// Note shown to the recipient
    pub message: Option<String>,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// `DebtRequest` links are validated by the controller
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
