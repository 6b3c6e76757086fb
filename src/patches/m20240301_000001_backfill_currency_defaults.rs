//! Fills empty currency, period and status fields left by older clients.
//!
//! Currencies come from the owner's settings, falling back to
//! [`FALLBACK_CURRENCY`](super::FALLBACK_CURRENCY).

use super::{FALLBACK_CURRENCY, is_blank};
use sea_orm::ConnectionTrait;
use sea_orm_migration::prelude::*;
use tracing::info;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Tables with a `currency` column that must never be blank
const CURRENCY_TABLES: [&str; 4] = ["budgets", "accounts", "debts", "jameyas"];

/// `(table, column, default)` for non-currency columns
const STATIC_DEFAULTS: [(&str, &str, &str); 3] = [
    ("budgets", "period", "monthly"),
    ("debts", "status", "open"),
    ("debt_requests", "status", "pending"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let backend = manager.get_database_backend();

        for table in CURRENCY_TABLES {
            // COALESCE((SELECT default_currency FROM settings WHERE settings.user = <table>.user), 'USD')
            let owner_default = SimpleExpr::SubQuery(
                None,
                Box::new(SubQueryStatement::SelectStatement(
                    Query::select()
                        .column((Alias::new("settings"), Alias::new("default_currency")))
                        .from(Alias::new("settings"))
                        .and_where(
                            Expr::col((Alias::new("settings"), Alias::new("user")))
                                .equals((Alias::new(table), Alias::new("user"))),
                        )
                        .and_where(
                            Expr::col((Alias::new("settings"), Alias::new("default_currency")))
                                .ne(""),
                        )
                        .limit(1)
                        .to_owned(),
                )),
            );
            let fill = Query::update()
                .table(Alias::new(table))
                .value(
                    Alias::new("currency"),
                    Func::coalesce([owner_default, Expr::val(FALLBACK_CURRENCY).into()]),
                )
                .cond_where(is_blank("currency"))
                .to_owned();
            let result = db.execute(backend.build(&fill)).await?;
            info!(
                "Filled currency on {} row(s) of '{}'.",
                result.rows_affected(),
                table
            );
        }

        for (table, column, default) in STATIC_DEFAULTS {
            let fill = Query::update()
                .table(Alias::new(table))
                .value(Alias::new(column), default)
                .cond_where(is_blank(column))
                .to_owned();
            let result = db.execute(backend.build(&fill)).await?;
            info!(
                "Filled {} on {} row(s) of '{}'.",
                column,
                result.rows_affected(),
                table
            );
        }
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
