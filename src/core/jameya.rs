//! Jameya and Jameya Payment controllers.

use crate::{
    core::{document::Controller, rules},
    entities::{jameya, jameya_payment},
    errors::{Error, Result},
};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter};

/// Minimum number of members for a rotating circle.
pub const MIN_MEMBERS: i32 = 2;

#[async_trait]
impl Controller for jameya::Model {
    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        rules::require_text("Jameya name", &self.name)?;
        rules::require_positive("installment_amount", self.installment_amount)?;
        if self.members_count < MIN_MEMBERS {
            return Err(Error::validation(format!(
                "A jameya needs at least {MIN_MEMBERS} members, got {}",
                self.members_count
            )));
        }
        if !(1..=self.members_count).contains(&self.my_turn) {
            return Err(Error::validation(format!(
                "Turn must be between 1 and {}, got {}",
                self.members_count, self.my_turn
            )));
        }
        rules::check_wallet(txn, self.wallet_id.as_deref(), &self.user).await?;
        rules::check_currency(txn, &self.currency, &self.user).await
    }
}

#[async_trait]
impl Controller for jameya_payment::Model {
    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        rules::require_positive("amount", self.amount)?;
        rules::require_text("Jameya", &self.jameya)?;
        let circle = rules::fetch_linked::<jameya::Model, _>(txn, &self.jameya, &self.user).await?;

        if !(1..=circle.members_count).contains(&self.period_no) {
            return Err(Error::validation(format!(
                "Period must be between 1 and {}, got {}",
                circle.members_count, self.period_no
            )));
        }

        let paid = jameya_payment::Entity::find()
            .filter(jameya_payment::Column::Jameya.eq(circle.id.as_str()))
            .filter(jameya_payment::Column::PeriodNo.eq(self.period_no))
            .filter(jameya_payment::Column::IsDeleted.eq(false))
            .filter(jameya_payment::Column::Id.ne(self.id.as_str()))
            .count(txn)
            .await?;
        if paid > 0 {
            return Err(Error::validation(format!(
                "Period {} of {} is already paid",
                self.period_no, circle.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{document::insert, session::Session};
    use crate::test_utils::*;

    fn payment(jameya_id: &str, period_no: i32) -> jameya_payment::Model {
        jameya_payment::Model {
            jameya: jameya_id.to_string(),
            period_no,
            amount: 500.0,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_jameya_member_and_turn_bounds() -> Result<()> {
        let db = setup_test_db().await?;
        let session = Session::new(TEST_USER);

        let solo = jameya::Model {
            members_count: 1,
            my_turn: 1,
            ..new_jameya("Solo")
        };
        assert!(matches!(
            insert(&db, &session, solo).await,
            Err(Error::Validation { .. })
        ));

        let late_turn = jameya::Model {
            my_turn: 11,
            ..new_jameya("Office")
        };
        assert!(matches!(
            insert(&db, &session, late_turn).await,
            Err(Error::Validation { .. })
        ));

        insert(&db, &session, new_jameya("Family")).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_payment_period_bounds_and_uniqueness() -> Result<()> {
        let db = setup_test_db().await?;
        let session = Session::new(TEST_USER);
        let circle = insert(&db, &session, new_jameya("Family")).await?;

        insert(&db, &session, payment(&circle.id, 1)).await?;
        assert!(matches!(
            insert(&db, &session, payment(&circle.id, 1)).await,
            Err(Error::Validation { .. })
        ));
        assert!(matches!(
            insert(&db, &session, payment(&circle.id, 0)).await,
            Err(Error::Validation { .. })
        ));
        assert!(matches!(
            insert(&db, &session, payment(&circle.id, 11)).await,
            Err(Error::Validation { .. })
        ));
        insert(&db, &session, payment(&circle.id, 10)).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_payment_for_foreign_circle_is_denied() -> Result<()> {
        let db = setup_test_db().await?;
        let circle = insert(&db, &Session::new(TEST_USER), new_jameya("Family")).await?;

        let result = insert(&db, &Session::new(OTHER_USER), payment(&circle.id, 2)).await;
        assert!(matches!(result, Err(Error::Permission { .. })));
        Ok(())
    }
}
