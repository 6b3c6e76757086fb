//! Sync Op controller - operations queued by offline clients.

use crate::{
    core::{doctype::DocType, document::Controller, rules},
    entities::sync_op,
    errors::{Error, Result},
};
use async_trait::async_trait;
use sea_orm::DatabaseTransaction;

/// Allowed values of `sync_op.op`
pub const SYNC_OPS: [&str; 3] = ["create", "update", "delete"];

/// Allowed values of `sync_op.status`
pub const SYNC_STATUSES: [&str; 3] = ["pending", "applied", "failed"];

#[async_trait]
impl Controller for sync_op::Model {
    const AUDITED: bool = false;

    fn normalize(&mut self) {
        if self.status.trim().is_empty() {
            self.status = "pending".to_string();
        }
    }

    async fn validate(&self, _txn: &DatabaseTransaction) -> Result<()> {
        let client_id = self.client_id.as_deref().unwrap_or_default();
        rules::require_text("Client op id", client_id)?;
        rules::require_one_of("Op", &self.op, &SYNC_OPS)?;
        rules::require_one_of("Sync status", &self.status, &SYNC_STATUSES)?;
        if DocType::from_label(&self.ref_doctype).is_none() {
            return Err(Error::validation(format!(
                "Unknown record type '{}'",
                self.ref_doctype
            )));
        }
        if matches!(self.op.as_str(), "update" | "delete")
            && self.ref_id.as_deref().is_none_or(str::is_empty)
        {
            return Err(Error::validation(format!(
                "A {} op needs the id of the record it targets",
                self.op
            )));
        }
        serde_json::from_str::<serde_json::Value>(&self.payload)
            .map_err(|e| Error::validation(format!("Payload is not valid JSON: {e}")))?;
        Ok(())
    }
}
