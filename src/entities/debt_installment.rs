//! Debt installment entity - one scheduled repayment of a debt.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Debt installment database model
#[derive(Clone, Debug, PartialEq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "debt_installments")]
#[serde(default)]
pub struct Model {
    /// Record name
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning user
    pub user: String,
    /// Parent debt id
    pub debt: String,
    /// Scheduled repayment
    pub amount: f64,
    /// When this installment falls due
    pub due_date: Option<Date>,
    /// Whether it has been repaid
    pub is_paid: bool,
    /// Identifier supplied by an offline client
    pub client_id: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between `DebtInstallment` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each installment belongs to one debt
    #[sea_orm(
        belongs_to = "super::debt::Entity",
        from = "Column::Debt",
        to = "super::debt::Column::Id"
    )]
    Debt,
}

impl Related<super::debt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Debt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
