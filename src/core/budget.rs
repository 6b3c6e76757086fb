//! Budget controller.

use crate::{
    core::{document::Controller, rules},
    entities::{bucket, budget, category},
    errors::{Error, Result},
};
use async_trait::async_trait;
use sea_orm::DatabaseTransaction;

/// Allowed values of `budget.period`
pub const BUDGET_PERIODS: [&str; 3] = ["weekly", "monthly", "yearly"];

#[async_trait]
impl Controller for budget::Model {
    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        rules::require_positive("amount", self.amount)?;
        rules::require_one_of("Budget period", &self.period, &BUDGET_PERIODS)?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(Error::validation(format!(
                    "Budget ends ({end}) before it starts ({start})"
                )));
            }
        }
        rules::check_wallet(txn, self.wallet_id.as_deref(), &self.user).await?;
        rules::check_optional_link::<category::Model, _>(txn, self.category.as_deref(), &self.user)
            .await?;
        rules::check_optional_link::<bucket::Model, _>(txn, self.bucket.as_deref(), &self.user)
            .await?;
        rules::check_currency(txn, &self.currency, &self.user).await
    }
}
