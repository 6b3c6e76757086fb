//! Adds the `wallet_id` column to wallet-scoped tables created before wallets existed.

use super::wallet_scoped_tables;
use sea_orm_migration::prelude::*;
use tracing::{info, warn};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in wallet_scoped_tables() {
            if !manager.has_table(table).await? {
                warn!("Table '{}' does not exist. Skipping.", table);
                continue;
            }
            if manager.has_column(table, "wallet_id").await? {
                info!("Column '{}.wallet_id' already exists. Skipping.", table);
                continue;
            }
            manager
                .alter_table(
                    Table::alter()
                        .table(Alias::new(table))
                        .add_column(ColumnDef::new(Alias::new("wallet_id")).string().null())
                        .to_owned(),
                )
                .await?;
            info!("Added column '{}.wallet_id'.", table);
        }
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
