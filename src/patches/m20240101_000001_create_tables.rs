//! Creates every record table from its entity definition.

use crate::entities;
use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

async fn create<E: EntityTrait>(manager: &SchemaManager<'_>, schema: &Schema, entity: E) -> Result<(), DbErr> {
    manager
        .create_table(schema.create_table_from_entity(entity).if_not_exists().to_owned())
        .await
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // Parents before children so foreign keys resolve
        create(manager, &schema, entities::Wallet).await?;
        create(manager, &schema, entities::Account).await?;
        create(manager, &schema, entities::Bucket).await?;
        create(manager, &schema, entities::Category).await?;
        create(manager, &schema, entities::Transaction).await?;
        create(manager, &schema, entities::Budget).await?;
        create(manager, &schema, entities::Debt).await?;
        create(manager, &schema, entities::DebtInstallment).await?;
        create(manager, &schema, entities::DebtRequest).await?;
        create(manager, &schema, entities::FxRate).await?;
        create(manager, &schema, entities::CustomCurrency).await?;
        create(manager, &schema, entities::Jameya).await?;
        create(manager, &schema, entities::JameyaPayment).await?;
        create(manager, &schema, entities::AllocationRule).await?;
        create(manager, &schema, entities::AllocationLine).await?;
        create(manager, &schema, entities::Attachment).await?;
        create(manager, &schema, entities::AuditLog).await?;
        create(manager, &schema, entities::SyncOp).await?;
        create(manager, &schema, entities::Settings).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children before parents
        for table in [
            "settings",
            "sync_ops",
            "audit_logs",
            "attachments",
            "allocation_lines",
            "allocation_rules",
            "jameya_payments",
            "jameyas",
            "custom_currencies",
            "fx_rates",
            "debt_requests",
            "debt_installments",
            "debts",
            "budgets",
            "transactions",
            "categories",
            "buckets",
            "accounts",
            "wallets",
        ] {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).if_exists().to_owned())
                .await?;
        }
        Ok(())
    }
}
