//! Transaction entity - a single money movement against an account.
//!
//! `kind` is `income`, `expense` or `transfer`. Amounts are always stored
//! positive; the kind carries the direction. Transfers move money from
//! `account` to `to_account`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Wallet this transaction is scoped to
    pub wallet_id: Option<String>,
    /// Account the money moves out of (or into, for income)
    pub account: String,
    /// `income`, `expense` or `transfer`
    pub kind: String,
    /// Positive amount in `currency`
    pub amount: f64,
    /// Currency code
    pub currency: String,
    /// Optional classification
    pub category: Option<String>,
    /// Optional bucket the money is drawn from or added to
    pub bucket: Option<String>,
    /// Destination account for transfers
    pub to_account: Option<String>,
    /// Booking date
    pub posting_date: Option<Date>,
    /// Free-form note
    pub note: Option<String>,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction belongs to one account
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::Account",
        to = "super::account::Column::Id"
    )]
    Account,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
