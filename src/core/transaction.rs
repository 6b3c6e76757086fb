//! Transaction controller - income, expense and transfer checks.
//!
//! Every linked record (account, destination account, category, bucket,
//! wallet) must be live and owned by the transaction's user.

use crate::{
    core::{document::Controller, rules},
    entities::{account, bucket, category, transaction},
    errors::{Error, Result},
};
use async_trait::async_trait;
use sea_orm::DatabaseTransaction;

/// Allowed values of `transaction.kind`
pub const TRANSACTION_KINDS: [&str; 3] = ["income", "expense", "transfer"];

#[async_trait]
impl Controller for transaction::Model {
    fn normalize(&mut self) {
        self.kind = self.kind.trim().to_ascii_lowercase();
        if self.to_account.as_deref().is_some_and(|a| a.trim().is_empty()) {
            self.to_account = None;
        }
    }

    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        rules::require_positive("amount", self.amount)?;
        rules::require_one_of("Transaction kind", &self.kind, &TRANSACTION_KINDS)?;
        rules::require_text("Account", &self.account)?;

        rules::check_wallet(txn, self.wallet_id.as_deref(), &self.user).await?;
        rules::fetch_linked::<account::Model, _>(txn, &self.account, &self.user).await?;
        rules::check_optional_link::<category::Model, _>(txn, self.category.as_deref(), &self.user)
            .await?;
        rules::check_optional_link::<bucket::Model, _>(txn, self.bucket.as_deref(), &self.user)
            .await?;

        match (self.kind.as_str(), self.to_account.as_deref()) {
            ("transfer", None) => {
                return Err(Error::validation("A transfer needs a destination account"));
            }
            ("transfer", Some(to_account)) => {
                if to_account == self.account {
                    return Err(Error::validation(
                        "Cannot transfer from an account to itself",
                    ));
                }
                rules::fetch_linked::<account::Model, _>(txn, to_account, &self.user).await?;
            }
            (_, Some(_)) => {
                return Err(Error::validation(
                    "Only transfers can have a destination account",
                ));
            }
            (_, None) => {}
        }

        rules::check_currency(txn, &self.currency, &self.user).await
    }
}
