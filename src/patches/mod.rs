//! Schema and data patches.
//!
//! Patches run in order through `sea-orm-migration`, which records each
//! applied patch in `seaql_migrations` so it runs only once. Every patch is
//! also safe to run again on its own: columns are added only when missing
//! and backfills only touch empty or null values.

use crate::core::DocType;
use crate::errors::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use tracing::{info, instrument};

mod m20240101_000001_create_tables;
mod m20240215_000001_add_wallet_scope;
mod m20240301_000001_backfill_currency_defaults;
mod m20240315_000001_backfill_wallet_id;
mod m20240401_000001_normalize_debt_request_status;

/// Currency used when neither the record nor the owner's settings name one.
pub const FALLBACK_CURRENCY: &str = "USD";

/// Ordered list of every patch.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_tables::Migration),
            Box::new(m20240215_000001_add_wallet_scope::Migration),
            Box::new(m20240301_000001_backfill_currency_defaults::Migration),
            Box::new(m20240315_000001_backfill_wallet_id::Migration),
            Box::new(m20240401_000001_normalize_debt_request_status::Migration),
        ]
    }
}

/// Applies every pending patch.
///
/// # Errors
/// Returns a database error when a patch fails; patches applied before it
/// stay recorded.
#[instrument(skip(db))]
pub async fn run_pending(db: &DatabaseConnection) -> Result<()> {
    let pending = Migrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        info!("No pending patches.");
        return Ok(());
    }
    info!("Applying {} patch(es)...", pending.len());
    Migrator::up(db, None).await?;
    info!("Patches applied.");
    Ok(())
}

/// Tables whose records carry a `wallet_id` column.
pub(crate) fn wallet_scoped_tables() -> impl Iterator<Item = &'static str> {
    DocType::ALL
        .into_iter()
        .filter(|doctype| doctype.is_wallet_scoped())
        .map(DocType::table_name)
}

/// `column IS NULL OR column = ''`
pub(crate) fn is_blank(column: &'static str) -> Cond {
    Cond::any()
        .add(Expr::col(Alias::new(column)).is_null())
        .add(Expr::col(Alias::new(column)).eq(""))
}
