//! Shared test utilities for the record controllers.
//!
//! Provides an in-memory database with every patch applied and record
//! factories with sensible defaults. `new_*` builders return unsaved models;
//! `create_*` helpers insert through the full lifecycle.

use crate::{
    core::{Session, document},
    entities::{
        account, allocation_rule, bucket, category, custom_currency, debt, jameya, transaction,
        wallet,
    },
    errors::Result,
    patches,
};
use sea_orm::DatabaseConnection;

/// Default session user for tests
pub const TEST_USER: &str = "alice@example.com";

/// A second user for ownership tests
pub const OTHER_USER: &str = "bob@example.com";

/// Creates an in-memory `SQLite` database with all patches applied.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    patches::run_pending(&db).await?;
    Ok(db)
}

/// Unsaved wallet in USD.
pub fn new_wallet(name: &str) -> wallet::Model {
    wallet::Model {
        name: name.to_string(),
        base_currency: "USD".to_string(),
        ..Default::default()
    }
}

/// Inserts a wallet owned by `user`.
pub async fn create_wallet_for(
    db: &DatabaseConnection,
    user: &str,
    name: &str,
) -> Result<wallet::Model> {
    document::insert(db, &Session::new(user), new_wallet(name)).await
}

/// Unsaved cash account in USD with a zero opening balance.
pub fn new_account(name: &str) -> account::Model {
    account::Model {
        name: name.to_string(),
        account_type: "cash".to_string(),
        currency: "USD".to_string(),
        ..Default::default()
    }
}

/// Inserts a cash account owned by [`TEST_USER`].
pub async fn create_test_account(db: &DatabaseConnection, name: &str) -> Result<account::Model> {
    create_account_for(db, TEST_USER, name).await
}

/// Inserts a cash account owned by `user`.
pub async fn create_account_for(
    db: &DatabaseConnection,
    user: &str,
    name: &str,
) -> Result<account::Model> {
    document::insert(db, &Session::new(user), new_account(name)).await
}

/// Inserts a bucket with no target owned by [`TEST_USER`].
pub async fn create_test_bucket(db: &DatabaseConnection, name: &str) -> Result<bucket::Model> {
    create_bucket_for(db, TEST_USER, name).await
}

/// Inserts a bucket with no target owned by `user`.
pub async fn create_bucket_for(
    db: &DatabaseConnection,
    user: &str,
    name: &str,
) -> Result<bucket::Model> {
    let doc = bucket::Model {
        name: name.to_string(),
        ..Default::default()
    };
    document::insert(db, &Session::new(user), doc).await
}

/// Inserts a top-level category owned by [`TEST_USER`].
///
/// # Arguments
/// * `kind` - `"income"` or `"expense"`
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
    kind: &str,
) -> Result<category::Model> {
    let doc = category::Model {
        name: name.to_string(),
        kind: kind.to_string(),
        ..Default::default()
    };
    document::insert(db, &Session::new(TEST_USER), doc).await
}

/// Unsaved transaction in USD against `account_id`.
pub fn new_transaction(account_id: &str, kind: &str, amount: f64) -> transaction::Model {
    transaction::Model {
        account: account_id.to_string(),
        kind: kind.to_string(),
        amount,
        currency: "USD".to_string(),
        ..Default::default()
    }
}

/// Unsaved debt the user owes, in USD, with no status.
pub fn new_debt(principal: f64) -> debt::Model {
    debt::Model {
        counterparty: "Sam".to_string(),
        direction: "i_owe".to_string(),
        principal,
        currency: "USD".to_string(),
        ..Default::default()
    }
}

/// Inserts [`new_debt`] for [`TEST_USER`].
pub async fn create_test_debt(db: &DatabaseConnection, principal: f64) -> Result<debt::Model> {
    document::insert(db, &Session::new(TEST_USER), new_debt(principal)).await
}

/// Unsaved savings circle.
///
/// # Defaults
/// * `members_count`: 10
/// * `my_turn`: 3
/// * `installment_amount`: 500.0 USD
pub fn new_jameya(name: &str) -> jameya::Model {
    jameya::Model {
        name: name.to_string(),
        installment_amount: 500.0,
        members_count: 10,
        my_turn: 3,
        currency: "USD".to_string(),
        ..Default::default()
    }
}

/// Inserts an active allocation rule with no lines for [`TEST_USER`].
pub async fn create_test_rule(
    db: &DatabaseConnection,
    name: &str,
) -> Result<allocation_rule::Model> {
    let doc = allocation_rule::Model {
        rule_name: name.to_string(),
        is_active: true,
        ..Default::default()
    };
    document::insert(db, &Session::new(TEST_USER), doc).await
}

/// Inserts a custom currency with two decimals for [`TEST_USER`].
pub async fn create_test_custom_currency(
    db: &DatabaseConnection,
    code: &str,
) -> Result<custom_currency::Model> {
    let doc = custom_currency::Model {
        code: code.to_string(),
        currency_name: format!("{code} units"),
        decimals: 2,
        ..Default::default()
    };
    document::insert(db, &Session::new(TEST_USER), doc).await
}
