//! Account, Bucket and Category controllers.

use crate::{
    core::{
        document::{Controller, Document},
        rules,
    },
    entities::{account, bucket, category},
    errors::{Error, Result},
};
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseTransaction};

/// Allowed values of `account.account_type`
pub const ACCOUNT_TYPES: [&str; 5] = ["cash", "bank", "card", "savings", "other"];

/// Allowed values of `category.kind`
pub const CATEGORY_KINDS: [&str; 2] = ["income", "expense"];

/// Deepest ancestor chain a category may sit under
pub const MAX_CATEGORY_DEPTH: usize = 16;

/// Walks up from `parent` and fails if `id` shows up among its ancestors.
async fn check_ancestry<C>(db: &C, id: &str, mut parent: category::Model) -> Result<()>
where
    C: ConnectionTrait,
{
    for _ in 0..MAX_CATEGORY_DEPTH {
        let Some(next) = parent.parent_category.take().filter(|p| !p.is_empty()) else {
            return Ok(());
        };
        if next == id {
            return Err(Error::validation(format!(
                "Category {id} cannot be nested under its own descendant"
            )));
        }
        match category::Model::load(db, &next).await? {
            Some(ancestor) => parent = ancestor,
            None => return Ok(()),
        }
    }
    Err(Error::validation(format!(
        "Categories cannot be nested more than {MAX_CATEGORY_DEPTH} levels deep"
    )))
}

#[async_trait]
impl Controller for account::Model {
    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        rules::require_text("Account name", &self.name)?;
        rules::require_one_of("Account type", &self.account_type, &ACCOUNT_TYPES)?;
        if !self.opening_balance.is_finite() {
            return Err(Error::InvalidAmount {
                field: "opening_balance",
                amount: self.opening_balance,
            });
        }
        rules::check_wallet(txn, self.wallet_id.as_deref(), &self.user).await?;
        rules::check_currency(txn, &self.currency, &self.user).await
    }
}

#[async_trait]
impl Controller for bucket::Model {
    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        rules::require_text("Bucket name", &self.name)?;
        rules::require_non_negative("target_amount", self.target_amount)?;
        rules::check_wallet(txn, self.wallet_id.as_deref(), &self.user).await
    }
}

#[async_trait]
impl Controller for category::Model {
    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        rules::require_text("Category name", &self.name)?;
        rules::require_one_of("Category kind", &self.kind, &CATEGORY_KINDS)?;
        rules::check_wallet(txn, self.wallet_id.as_deref(), &self.user).await?;

        let Some(parent_id) = self.parent_category.as_deref().filter(|p| !p.is_empty()) else {
            return Ok(());
        };
        if parent_id == self.id {
            return Err(Error::validation("A category cannot be its own parent"));
        }
        let parent = rules::fetch_linked::<category::Model, _>(txn, parent_id, &self.user).await?;
        if parent.kind != self.kind {
            return Err(Error::validation(format!(
                "Parent category '{}' is an {} category, expected {}",
                parent.name, parent.kind, self.kind
            )));
        }
        check_ancestry(txn, &self.id, parent).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        document::{insert, save},
        session::Session,
    };
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_account_type_must_be_known() -> Result<()> {
        let db = setup_test_db().await?;
        let doc = account::Model {
            account_type: "crypto".to_string(),
            ..new_account("Wallet app")
        };

        let result = insert(&db, &Session::new(TEST_USER), doc).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_account_allows_negative_opening_balance() -> Result<()> {
        let db = setup_test_db().await?;
        let doc = account::Model {
            opening_balance: -250.0,
            account_type: "card".to_string(),
            ..new_account("Credit card")
        };

        let stored = insert(&db, &Session::new(TEST_USER), doc).await?;
        assert!((stored.opening_balance + 250.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[tokio::test]
    async fn test_account_in_foreign_wallet_is_denied() -> Result<()> {
        let db = setup_test_db().await?;
        let foreign = create_wallet_for(&db, OTHER_USER, "Theirs").await?;
        let doc = account::Model {
            wallet_id: Some(foreign.id),
            ..new_account("Cash")
        };

        let result = insert(&db, &Session::new(TEST_USER), doc).await;
        assert!(matches!(result, Err(Error::Permission { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_bucket_target_cannot_be_negative() -> Result<()> {
        let db = setup_test_db().await?;
        let doc = bucket::Model {
            name: "Vacation".to_string(),
            target_amount: -1.0,
            ..Default::default()
        };

        let result = insert(&db, &Session::new(TEST_USER), doc).await;
        assert!(matches!(result, Err(Error::InvalidAmount { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_category_parent_must_match_kind() -> Result<()> {
        let db = setup_test_db().await?;
        let session = Session::new(TEST_USER);
        let food = create_test_category(&db, "Food", "expense").await?;

        let groceries = category::Model {
            name: "Groceries".to_string(),
            kind: "expense".to_string(),
            parent_category: Some(food.id.clone()),
            ..Default::default()
        };
        insert(&db, &session, groceries).await?;

        let salary = category::Model {
            name: "Salary".to_string(),
            kind: "income".to_string(),
            parent_category: Some(food.id),
            ..Default::default()
        };
        let result = insert(&db, &session, salary).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_category_cannot_parent_itself() -> Result<()> {
        let db = setup_test_db().await?;
        let food = create_test_category(&db, "Food", "expense").await?;

        let looped = category::Model {
            parent_category: Some(food.id.clone()),
            ..food
        };
        let result = save(&db, &Session::new(TEST_USER), looped).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_category_cycles_are_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let session = Session::new(TEST_USER);
        let food = create_test_category(&db, "Food", "expense").await?;
        let groceries = insert(
            &db,
            &session,
            category::Model {
                name: "Groceries".to_string(),
                kind: "expense".to_string(),
                parent_category: Some(food.id.clone()),
                ..Default::default()
            },
        )
        .await?;
        let produce = insert(
            &db,
            &session,
            category::Model {
                name: "Produce".to_string(),
                kind: "expense".to_string(),
                parent_category: Some(groceries.id.clone()),
                ..Default::default()
            },
        )
        .await?;

        let two_step = category::Model {
            parent_category: Some(groceries.id.clone()),
            ..food.clone()
        };
        assert!(matches!(
            save(&db, &session, two_step).await,
            Err(Error::Validation { .. })
        ));

        let three_step = category::Model {
            parent_category: Some(produce.id.clone()),
            ..food.clone()
        };
        assert!(matches!(
            save(&db, &session, three_step).await,
            Err(Error::Validation { .. })
        ));

        // Moving a leaf under a sibling branch is fine
        let drinks = create_test_category(&db, "Drinks", "expense").await?;
        let moved = category::Model {
            parent_category: Some(drinks.id),
            ..produce
        };
        save(&db, &session, moved).await?;
        Ok(())
    }
}
