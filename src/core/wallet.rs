//! Wallet and Settings controllers.

use crate::{
    core::{document::Controller, rules, session::Session},
    entities::{settings, wallet},
    errors::{Error, Result},
};
use async_trait::async_trait;
use sea_orm::DatabaseTransaction;

#[async_trait]
impl Controller for wallet::Model {
    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        rules::require_text("Wallet name", &self.name)?;
        rules::check_currency(txn, &self.base_currency, &self.user).await
    }
}

#[async_trait]
impl Controller for settings::Model {
    /// One settings record per user, named after the user.
    fn before_insert(&mut self, session: &Session) {
        if self.user.trim().is_empty() {
            self.user = session.user().to_owned();
        }
        self.id = self.user.clone();
    }

    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        if self.id != self.user {
            return Err(Error::validation("Settings must be named after their user"));
        }
        rules::check_currency(txn, &self.default_currency, &self.user).await?;
        if !(0..=6).contains(&self.week_start) {
            return Err(Error::validation(format!(
                "Week start must be between 0 and 6, got {}",
                self.week_start
            )));
        }
        rules::check_optional_link::<wallet::Model, _>(
            txn,
            self.default_wallet.as_deref(),
            &self.user,
        )
        .await
    }
}
