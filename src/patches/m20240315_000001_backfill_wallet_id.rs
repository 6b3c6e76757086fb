//! Assigns records that predate wallets to their owner's wallet.
//!
//! The owner's default wallet wins, then the oldest live one. Owners with no
//! wallet at all get a new "Main" wallet. Only empty `wallet_id` values are
//! touched.

use super::{FALLBACK_CURRENCY, is_blank, wallet_scoped_tables};
use crate::entities::{settings, wallet};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use sea_orm_migration::prelude::*;
use std::collections::HashMap;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Name given to wallets created by this patch
pub const MAIN_WALLET_NAME: &str = "Main";

async fn owners_missing_wallet<C: ConnectionTrait>(db: &C, table: &'static str) -> Result<Vec<String>, DbErr> {
    let query = Query::select()
        .distinct()
        .column(Alias::new("user"))
        .from(Alias::new(table))
        .cond_where(is_blank("wallet_id"))
        .to_owned();
    let rows = db.query_all(db.get_database_backend().build(&query)).await?;
    rows.iter()
        .map(|row| row.try_get::<String>("", "user"))
        .collect()
}

async fn wallet_for_owner<C: ConnectionTrait>(db: &C, user: &str) -> Result<String, DbErr> {
    let existing = wallet::Entity::find()
        .filter(wallet::Column::User.eq(user))
        .filter(wallet::Column::IsDeleted.eq(false))
        .order_by_desc(wallet::Column::IsDefault)
        .order_by_asc(wallet::Column::CreatedAt)
        .one(db)
        .await?;
    if let Some(wallet) = existing {
        return Ok(wallet.id);
    }

    let currency = settings::Entity::find_by_id(user.to_owned())
        .one(db)
        .await?
        .map(|s| s.default_currency)
        .filter(|code| !code.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_CURRENCY.to_owned());
    let now = Utc::now();
    let created = wallet::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user: Set(user.to_owned()),
        name: Set(MAIN_WALLET_NAME.to_owned()),
        base_currency: Set(currency),
        is_default: Set(true),
        client_id: Set(None),
        is_deleted: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    info!("Created wallet '{}' for {}.", MAIN_WALLET_NAME, user);
    Ok(created.id)
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let backend = manager.get_database_backend();
        let mut resolved: HashMap<String, String> = HashMap::new();

        for table in wallet_scoped_tables() {
            if !manager.has_column(table, "wallet_id").await? {
                warn!("Table '{}' has no wallet_id column. Skipping.", table);
                continue;
            }
            for user in owners_missing_wallet(db, table).await? {
                let wallet_id = match resolved.get(&user) {
                    Some(id) => id.clone(),
                    None => {
                        let id = wallet_for_owner(db, &user).await?;
                        resolved.insert(user.clone(), id.clone());
                        id
                    }
                };
                let fill = Query::update()
                    .table(Alias::new(table))
                    .value(Alias::new("wallet_id"), wallet_id.as_str())
                    .cond_where(
                        Cond::all()
                            .add(Expr::col(Alias::new("user")).eq(user.as_str()))
                            .add(is_blank("wallet_id")),
                    )
                    .to_owned();
                let result = db.execute(backend.build(&fill)).await?;
                info!(
                    "Assigned wallet {} to {} row(s) of '{}' for {}.",
                    wallet_id,
                    result.rows_affected(),
                    table,
                    user
                );
            }
        }
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{account, bucket};
    use crate::test_utils::*;

    async fn legacy_account<C: ConnectionTrait>(db: &C, id: &str, user: &str) -> Result<(), DbErr> {
        let now = Utc::now();
        account::ActiveModel {
            id: Set(id.to_owned()),
            user: Set(user.to_owned()),
            name: Set(format!("Legacy {id}")),
            account_type: Set("cash".to_owned()),
            currency: Set("USD".to_owned()),
            opening_balance: Set(0.0),
            wallet_id: Set(None),
            client_id: Set(None),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_backfill_creates_main_wallet_once() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        legacy_account(&db, "A-1", TEST_USER).await?;
        legacy_account(&db, "A-2", TEST_USER).await?;

        let manager = SchemaManager::new(&db);
        Migration.up(&manager).await?;
        Migration.up(&manager).await?;

        let wallets = wallet::Entity::find()
            .filter(wallet::Column::User.eq(TEST_USER))
            .all(&db)
            .await?;
        assert_eq!(wallets.len(), 1);
        assert_eq!(wallets[0].name, MAIN_WALLET_NAME);
        assert!(wallets[0].is_default);

        for id in ["A-1", "A-2"] {
            let stored = account::Entity::find_by_id(id).one(&db).await?.unwrap();
            assert_eq!(stored.wallet_id.as_deref(), Some(wallets[0].id.as_str()));
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_backfill_prefers_default_wallet_and_keeps_set_values() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        let older = create_wallet_for(&db, TEST_USER, "Older").await?;
        let default = crate::core::document::insert(
            &db,
            &crate::core::Session::new(TEST_USER),
            wallet::Model {
                is_default: true,
                ..new_wallet("Household")
            },
        )
        .await?;
        legacy_account(&db, "A-1", TEST_USER).await?;
        let scoped = create_test_bucket(&db, "Rent").await?;
        let scoped = crate::core::document::save(
            &db,
            &crate::core::Session::new(TEST_USER),
            bucket::Model {
                wallet_id: Some(older.id.clone()),
                ..scoped
            },
        )
        .await?;

        Migration.up(&SchemaManager::new(&db)).await?;

        let account = account::Entity::find_by_id("A-1").one(&db).await?.unwrap();
        assert_eq!(account.wallet_id, Some(default.id));
        let bucket = bucket::Entity::find_by_id(scoped.id).one(&db).await?.unwrap();
        assert_eq!(bucket.wallet_id, Some(older.id));
        Ok(())
    }
}
