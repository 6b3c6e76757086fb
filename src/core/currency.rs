//! FX Rate and Custom Currency controllers.

use crate::{
    core::{document::Controller, rules},
    entities::{custom_currency, fx_rate},
    errors::{Error, Result},
};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter};

#[async_trait]
impl Controller for fx_rate::Model {
    fn normalize(&mut self) {
        self.from_currency = self.from_currency.trim().to_ascii_uppercase();
        self.to_currency = self.to_currency.trim().to_ascii_uppercase();
    }

    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        rules::check_currency(txn, &self.from_currency, &self.user).await?;
        rules::check_currency(txn, &self.to_currency, &self.user).await?;
        if self.from_currency == self.to_currency {
            return Err(Error::validation(format!(
                "Cannot define a rate from {} to itself",
                self.from_currency
            )));
        }
        rules::require_positive("rate", self.rate)
    }
}

/// Three to five uppercase ASCII letters.
fn is_custom_code(code: &str) -> bool {
    (3..=5).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_uppercase())
}

#[async_trait]
impl Controller for custom_currency::Model {
    fn normalize(&mut self) {
        self.code = self.code.trim().to_ascii_uppercase();
    }

    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        if !is_custom_code(&self.code) {
            return Err(Error::validation(format!(
                "Currency code must be 3 to 5 letters, got '{}'",
                self.code
            )));
        }
        rules::require_text("Currency name", &self.currency_name)?;
        if !(0..=4).contains(&self.decimals) {
            return Err(Error::validation(format!(
                "Decimals must be between 0 and 4, got {}",
                self.decimals
            )));
        }

        let clashes = custom_currency::Entity::find()
            .filter(custom_currency::Column::User.eq(self.user.as_str()))
            .filter(custom_currency::Column::Code.eq(self.code.as_str()))
            .filter(custom_currency::Column::IsDeleted.eq(false))
            .filter(custom_currency::Column::Id.ne(self.id.as_str()))
            .count(txn)
            .await?;
        if clashes > 0 {
            return Err(Error::validation(format!(
                "Currency {} already exists",
                self.code
            )));
        }
        Ok(())
    }
}
