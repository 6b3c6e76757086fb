//! Allocation Rule and Allocation Line controllers.
//!
//! A rule splits incoming money across buckets. Each line routes a share
//! between 1 and 100 percent to one bucket, a bucket appears at most once per
//! rule, and the live lines of a rule never add up to more than 100 percent.

use crate::{
    core::{document::Controller, rules},
    entities::{allocation_line, allocation_rule, bucket},
    errors::{Error, Result},
};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter};

/// Smallest share a line may route
pub const MIN_PERCENT: f64 = 1.0;

/// Cap for a single line and for the sum of a rule's lines
pub const MAX_PERCENT: f64 = 100.0;

/// Live lines of `rule_id` other than `exclude_id`.
pub async fn other_lines<C>(
    db: &C,
    rule_id: &str,
    exclude_id: &str,
) -> Result<Vec<allocation_line::Model>>
where
    C: ConnectionTrait,
{
    allocation_line::Entity::find()
        .filter(allocation_line::Column::Rule.eq(rule_id))
        .filter(allocation_line::Column::IsDeleted.eq(false))
        .filter(allocation_line::Column::Id.ne(exclude_id))
        .all(db)
        .await
        .map_err(Into::into)
}

/// Checks a single line's share.
pub fn check_percent(percent: f64) -> Result<()> {
    if !percent.is_finite() || !(MIN_PERCENT..=MAX_PERCENT).contains(&percent) {
        return Err(Error::validation(format!(
            "Percent must be between {MIN_PERCENT} and {MAX_PERCENT}, got {percent}"
        )));
    }
    Ok(())
}

#[async_trait]
impl Controller for allocation_rule::Model {
    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        rules::require_text("Rule name", &self.rule_name)?;
        rules::check_wallet(txn, self.wallet_id.as_deref(), &self.user).await
    }
}

#[async_trait]
impl Controller for allocation_line::Model {
    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        check_percent(self.percent)?;
        rules::require_text("Rule", &self.rule)?;
        rules::require_text("Bucket", &self.bucket)?;

        let rule =
            rules::fetch_linked::<allocation_rule::Model, _>(txn, &self.rule, &self.user).await?;
        rules::fetch_linked::<bucket::Model, _>(txn, &self.bucket, &self.user).await?;

        let siblings = other_lines(txn, &rule.id, &self.id).await?;
        if siblings.iter().any(|line| line.bucket == self.bucket) {
            return Err(Error::validation(format!(
                "Bucket {} already has a line in rule {}",
                self.bucket, rule.rule_name
            )));
        }

        let total: f64 = siblings.iter().map(|line| line.percent).sum::<f64>() + self.percent;
        if total > MAX_PERCENT + rules::EPSILON {
            return Err(Error::validation(format!(
                "Allocation lines of rule {} add up to {total}%, above {MAX_PERCENT}%",
                rule.rule_name
            )));
        }
        Ok(())
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

    fn line(rule_id: &str, bucket_id: &str, percent: f64) -> allocation_line::Model {
        allocation_line::Model {
            rule: rule_id.to_string(),
            bucket: bucket_id.to_string(),
            percent,
            ..Default::default()
        }
    }

    #[test]
    fn test_check_percent_bounds() {
        assert!(check_percent(1.0).is_ok());
        assert!(check_percent(100.0).is_ok());
        assert!(check_percent(33.3).is_ok());
        assert!(check_percent(0.0).is_err());
        assert!(check_percent(0.5).is_err());
        assert!(check_percent(-10.0).is_err());
        assert!(check_percent(100.01).is_err());
        assert!(check_percent(f64::NAN).is_err());
    }

    #[tokio::test]
    async fn test_lines_fill_rule_up_to_hundred() -> Result<()> {
        let db = setup_test_db().await?;
        let session = Session::new(TEST_USER);
        let rule = create_test_rule(&db, "Salary split").await?;
        let savings = create_test_bucket(&db, "Savings").await?;
        let rent = create_test_bucket(&db, "Rent").await?;
        let fun = create_test_bucket(&db, "Fun").await?;

        insert(&db, &session, line(&rule.id, &savings.id, 30.0)).await?;
        insert(&db, &session, line(&rule.id, &rent.id, 70.0)).await?;

        let result = insert(&db, &session, line(&rule.id, &fun.id, 1.0)).await;
        assert!(matches!(result, Err(Error::Validation { .. })));

        let total: f64 = other_lines(&db, &rule.id, "")
            .await?
            .iter()
            .map(|l| l.percent)
            .sum();
        assert!((total - 100.0).abs() < 1e-9);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_bucket_in_rule_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let session = Session::new(TEST_USER);
        let rule = create_test_rule(&db, "Salary split").await?;
        let savings = create_test_bucket(&db, "Savings").await?;

        insert(&db, &session, line(&rule.id, &savings.id, 10.0)).await?;
        let result = insert(&db, &session, line(&rule.id, &savings.id, 10.0)).await;
        assert!(matches!(result, Err(Error::Validation { .. })));

        // The same bucket may appear in another rule
        let other_rule = create_test_rule(&db, "Bonus split").await?;
        insert(&db, &session, line(&other_rule.id, &savings.id, 50.0)).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_editing_line_replaces_its_share() -> Result<()> {
        let db = setup_test_db().await?;
        let session = Session::new(TEST_USER);
        let rule = create_test_rule(&db, "Salary split").await?;
        let savings = create_test_bucket(&db, "Savings").await?;
        let rent = create_test_bucket(&db, "Rent").await?;

        let first = insert(&db, &session, line(&rule.id, &savings.id, 40.0)).await?;
        insert(&db, &session, line(&rule.id, &rent.id, 50.0)).await?;

        let bumped = allocation_line::Model {
            percent: 50.0,
            ..first.clone()
        };
        save(&db, &session, bumped).await?;

        let overflow = allocation_line::Model {
            percent: 51.0,
            ..first
        };
        assert!(matches!(
            save(&db, &session, overflow).await,
            Err(Error::Validation { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_deleted_lines_do_not_count() -> Result<()> {
        let db = setup_test_db().await?;
        let session = Session::new(TEST_USER);
        let rule = create_test_rule(&db, "Salary split").await?;
        let savings = create_test_bucket(&db, "Savings").await?;

        let all_in = insert(&db, &session, line(&rule.id, &savings.id, 100.0)).await?;
        soft_delete::<allocation_line::Model>(&db, &session, &all_in.id).await?;

        // Same bucket and full share are available again
        insert(&db, &session, line(&rule.id, &savings.id, 100.0)).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_line_must_share_owner_with_rule_and_bucket() -> Result<()> {
        let db = setup_test_db().await?;
        let rule = create_test_rule(&db, "Salary split").await?;
        let theirs = create_bucket_for(&db, OTHER_USER, "Their savings").await?;
        let mine = create_test_bucket(&db, "Savings").await?;

        let foreign_bucket = insert(&db, &Session::new(TEST_USER), line(&rule.id, &theirs.id, 10.0)).await;
        assert!(matches!(foreign_bucket, Err(Error::Permission { .. })));

        let foreign_rule = insert(&db, &Session::new(OTHER_USER), line(&rule.id, &theirs.id, 10.0)).await;
        assert!(matches!(foreign_rule, Err(Error::Permission { .. })));

        let result = insert(&db, &Session::new(TEST_USER), line(&rule.id, &mine.id, 0.5)).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }
}
