//! Audit trail - one Audit Log row per audited insert, update and delete.

use crate::{
    core::{
        doctype::DocType,
        document::{self, Controller, Document},
        rules,
        session::Session,
    },
    entities::audit_log,
    errors::{Error, Result},
};
use async_trait::async_trait;
use sea_orm::DatabaseTransaction;

/// Allowed values of `audit_log.action`
pub const ACTIONS: [&str; 3] = ["insert", "update", "delete"];

/// What happened to the audited record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditAction {
    /// Record created
    Insert,
    /// Record saved
    Update,
    /// Record soft-deleted
    Delete,
}

impl AuditAction {
    /// Value stored in `audit_log.action`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Writes the audit row for `doc` inside the caller's transaction.
pub(crate) async fn record<D: Document>(
    txn: &DatabaseTransaction,
    session: &Session,
    doc: &D,
    action: AuditAction,
) -> Result<()> {
    let entry = audit_log::Model {
        user: session.user().to_owned(),
        ref_doctype: D::DOCTYPE.label().to_owned(),
        ref_id: doc.id().to_owned(),
        action: action.as_str().to_owned(),
        data: Some(serde_json::to_string(doc)?),
        ..Default::default()
    };
    document::insert_in(txn, session, entry).await?;
    Ok(())
}

#[async_trait]
impl Controller for audit_log::Model {
    const AUDITED: bool = false;

    async fn validate(&self, _txn: &DatabaseTransaction) -> Result<()> {
        rules::require_one_of("Action", &self.action, &ACTIONS)?;
        if DocType::from_label(&self.ref_doctype).is_none() {
            return Err(Error::validation(format!(
                "Unknown record type '{}'",
                self.ref_doctype
            )));
        }
        rules::require_text("Reference", &self.ref_id)?;
        if let Some(data) = &self.data {
            serde_json::from_str::<serde_json::Value>(data)
                .map_err(|e| Error::validation(format!("Audit data is not valid JSON: {e}")))?;
        }
        Ok(())
    }
}
