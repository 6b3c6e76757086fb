//! Debt, Debt Installment and Debt Request controllers.
//!
//! The installments of a debt never add up to more than its principal, and
//! debt request statuses are limited to `pending`, `accepted` and
//! `rejected` (`declined` is accepted as a legacy spelling of `rejected`).

use crate::{
    core::{document::Controller, rules},
    entities::{debt, debt_installment, debt_request},
    errors::{Error, Result},
};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter};

/// Allowed values of `debt.direction`
pub const DEBT_DIRECTIONS: [&str; 2] = ["i_owe", "owed_to_me"];

/// Allowed values of `debt.status`
pub const DEBT_STATUSES: [&str; 2] = ["open", "settled"];

/// Allowed values of `debt_request.status`
pub const REQUEST_STATUSES: [&str; 3] = ["pending", "accepted", "rejected"];

/// Maps legacy and differently-cased request statuses onto the canonical set.
///
/// `declined` always becomes `rejected`; an empty status becomes `pending`.
#[must_use]
pub fn normalize_request_status(status: &str) -> String {
    let status = status.trim().to_ascii_lowercase();
    match status.as_str() {
        "declined" => "rejected".to_string(),
        "" => "pending".to_string(),
        _ => status,
    }
}

/// Sum of the live installments of `debt_id`, leaving out `exclude_id`.
pub async fn installment_total<C>(db: &C, debt_id: &str, exclude_id: &str) -> Result<f64>
where
    C: ConnectionTrait,
{
    let installments = debt_installment::Entity::find()
        .filter(debt_installment::Column::Debt.eq(debt_id))
        .filter(debt_installment::Column::IsDeleted.eq(false))
        .filter(debt_installment::Column::Id.ne(exclude_id))
        .all(db)
        .await?;
    Ok(installments.iter().map(|i| i.amount).sum())
}

#[async_trait]
impl Controller for debt::Model {
    fn normalize(&mut self) {
        if self.status.trim().is_empty() {
            self.status = "open".to_string();
        }
    }

    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        rules::require_text("Counterparty", &self.counterparty)?;
        rules::require_one_of("Direction", &self.direction, &DEBT_DIRECTIONS)?;
        rules::require_one_of("Debt status", &self.status, &DEBT_STATUSES)?;
        rules::require_positive("principal", self.principal)?;

        // Lowering the principal below what is already scheduled is not allowed
        let scheduled = installment_total(txn, &self.id, "").await?;
        if scheduled > self.principal + rules::EPSILON {
            return Err(Error::validation(format!(
                "Principal {} is less than the {scheduled} already scheduled in installments",
                self.principal
            )));
        }

        rules::check_wallet(txn, self.wallet_id.as_deref(), &self.user).await?;
        rules::check_currency(txn, &self.currency, &self.user).await
    }
}

#[async_trait]
impl Controller for debt_installment::Model {
    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        rules::require_positive("amount", self.amount)?;
        rules::require_text("Debt", &self.debt)?;
        let debt = rules::fetch_linked::<debt::Model, _>(txn, &self.debt, &self.user).await?;

        let others = installment_total(txn, &debt.id, &self.id).await?;
        let total = others + self.amount;
        if total > debt.principal + rules::EPSILON {
            return Err(Error::validation(format!(
                "Installments total {total} exceeds the debt principal {}",
                debt.principal
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Controller for debt_request::Model {
    fn normalize(&mut self) {
        self.status = normalize_request_status(&self.status);
    }

    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        rules::require_one_of("Request status", &self.status, &REQUEST_STATUSES)?;
        rules::require_text("Recipient", &self.to_user)?;
        if self.to_user == self.user {
            return Err(Error::validation("Cannot send a debt request to yourself"));
        }
        rules::require_positive("amount", self.amount)?;
        rules::check_optional_link::<debt::Model, _>(txn, self.debt.as_deref(), &self.user).await?;
        rules::check_currency(txn, &self.currency, &self.user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        document::{insert, save, soft_delete},
        session::Session,
    };
    use crate::test_utils::*;

    fn installment(debt_id: &str, amount: f64) -> debt_installment::Model {
        debt_installment::Model {
            debt: debt_id.to_string(),
            amount,
            ..Default::default()
        }
    }

    fn request(status: &str) -> debt_request::Model {
        debt_request::Model {
            to_user: OTHER_USER.to_string(),
            amount: 75.0,
            currency: "USD".to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_request_status() {
        assert_eq!(normalize_request_status("declined"), "rejected");
        assert_eq!(normalize_request_status(" Declined "), "rejected");
        assert_eq!(normalize_request_status("ACCEPTED"), "accepted");
        assert_eq!(normalize_request_status(""), "pending");
        assert_eq!(normalize_request_status("lost"), "lost");
    }

    #[tokio::test]
    async fn test_debt_defaults_to_open() -> Result<()> {
        let db = setup_test_db().await?;
        let debt = create_test_debt(&db, 1000.0).await?;
        assert_eq!(debt.status, "open");
        Ok(())
    }

    #[tokio::test]
    async fn test_debt_direction_must_be_known() -> Result<()> {
        let db = setup_test_db().await?;
        let doc = debt::Model {
            direction: "lent".to_string(),
            ..new_debt(100.0)
        };
        let result = insert(&db, &Session::new(TEST_USER), doc).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_installments_up_to_principal() -> Result<()> {
        let db = setup_test_db().await?;
        let session = Session::new(TEST_USER);
        let debt = create_test_debt(&db, 1000.0).await?;

        insert(&db, &session, installment(&debt.id, 400.0)).await?;
        insert(&db, &session, installment(&debt.id, 600.0)).await?;

        let result = insert(&db, &session, installment(&debt.id, 0.01)).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        assert!((installment_total(&db, &debt.id, "").await? - 1000.0).abs() < 1e-9);
        Ok(())
    }

    #[tokio::test]
    async fn test_editing_installment_excludes_its_old_amount() -> Result<()> {
        let db = setup_test_db().await?;
        let session = Session::new(TEST_USER);
        let debt = create_test_debt(&db, 1000.0).await?;
        let first = insert(&db, &session, installment(&debt.id, 500.0)).await?;
        insert(&db, &session, installment(&debt.id, 300.0)).await?;

        let raised = debt_installment::Model {
            amount: 700.0,
            ..first.clone()
        };
        save(&db, &session, raised).await?;

        let too_much = debt_installment::Model {
            amount: 700.01,
            ..first
        };
        let result = save(&db, &session, too_much).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_deleted_installments_free_up_principal() -> Result<()> {
        let db = setup_test_db().await?;
        let session = Session::new(TEST_USER);
        let debt = create_test_debt(&db, 100.0).await?;
        let full = insert(&db, &session, installment(&debt.id, 100.0)).await?;

        soft_delete::<debt_installment::Model>(&db, &session, &full.id).await?;
        insert(&db, &session, installment(&debt.id, 100.0)).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_principal_cannot_drop_below_installments() -> Result<()> {
        let db = setup_test_db().await?;
        let session = Session::new(TEST_USER);
        let debt = create_test_debt(&db, 1000.0).await?;
        insert(&db, &session, installment(&debt.id, 800.0)).await?;

        let lowered = debt::Model {
            principal: 500.0,
            ..debt
        };
        let result = save(&db, &session, lowered).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_installment_parent_must_be_owned() -> Result<()> {
        let db = setup_test_db().await?;
        let debt = create_test_debt(&db, 1000.0).await?;

        let result = insert(&db, &Session::new(OTHER_USER), installment(&debt.id, 10.0)).await;
        assert!(matches!(result, Err(Error::Permission { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_declined_request_is_stored_as_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let session = Session::new(TEST_USER);

        let stored = insert(&db, &session, request("declined")).await?;
        assert_eq!(stored.status, "rejected");

        let reopened = debt_request::Model {
            status: "pending".to_string(),
            ..stored
        };
        let reopened = save(&db, &session, reopened).await?;
        let declined_again = debt_request::Model {
            status: "Declined".to_string(),
            ..reopened
        };
        let saved = save(&db, &session, declined_again).await?;
        assert_eq!(saved.status, "rejected");
        Ok(())
    }

    #[tokio::test]
    async fn test_request_status_is_constrained() -> Result<()> {
        let db = setup_test_db().await?;
        let result = insert(&db, &Session::new(TEST_USER), request("maybe")).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_request_to_self_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let doc = debt_request::Model {
            to_user: TEST_USER.to_string(),
            ..request("pending")
        };
        let result = insert(&db, &Session::new(TEST_USER), doc).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }
}
