//! Rewrites the legacy `declined` debt request status to `rejected`.

use sea_orm::ConnectionTrait;
use sea_orm_migration::prelude::*;
use tracing::info;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let rewrite = Query::update()
            .table(Alias::new("debt_requests"))
            .value(Alias::new("status"), "rejected")
            .and_where(
                Expr::expr(Func::lower(Func::cust(Alias::new("TRIM")).arg(Expr::col(
                    Alias::new("status"),
                ))))
                .eq("declined"),
            )
            .to_owned();
        let backend = manager.get_database_backend();
        let result = manager.get_connection().execute(backend.build(&rewrite)).await?;
        info!(
            "Rewrote {} declined debt request(s) to rejected.",
            result.rows_affected()
        );
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
