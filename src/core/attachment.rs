//! Attachment controller.

use crate::{
    core::{
        doctype::{DocType, for_doctype},
        document::Controller,
        rules,
    },
    entities::attachment,
    errors::{Error, Result},
};
use async_trait::async_trait;
use sea_orm::DatabaseTransaction;

/// Record types that cannot carry attachments.
const NOT_ATTACHABLE: [DocType; 2] = [DocType::Attachment, DocType::AuditLog];

#[async_trait]
impl Controller for attachment::Model {
    async fn validate(&self, txn: &DatabaseTransaction) -> Result<()> {
        let parent_doctype = DocType::from_label(&self.parent_doctype)
            .filter(|d| !NOT_ATTACHABLE.contains(d))
            .ok_or_else(|| {
                Error::validation(format!(
                    "Cannot attach files to '{}'",
                    self.parent_doctype
                ))
            })?;
        rules::require_text("Parent", &self.parent_id)?;
        rules::require_text("File name", &self.file_name)?;
        rules::require_text("File URL", &self.file_url)?;
        if self.file_size < 0 {
            return Err(Error::validation("File size cannot be negative"));
        }

        for_doctype!(parent_doctype, Parent => {
            rules::fetch_linked::<Parent, _>(txn, &self.parent_id, &self.user).await?;
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{document::insert, session::Session};
    use crate::test_utils::*;

    fn receipt(parent_doctype: &str, parent_id: &str) -> attachment::Model {
        attachment::Model {
            parent_doctype: parent_doctype.to_string(),
            parent_id: parent_id.to_string(),
            file_name: "receipt.jpg".to_string(),
            file_url: "/files/receipt.jpg".to_string(),
            file_size: 2048,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_attach_to_owned_transaction() -> Result<()> {
        let db = setup_test_db().await?;
        let account = create_test_account(&db, "Cash").await?;
        let txn = insert(
            &db,
            &Session::new(TEST_USER),
            new_transaction(&account.id, "expense", 9.99),
        )
        .await?;

        let stored = insert(&db, &Session::new(TEST_USER), receipt("Transaction", &txn.id)).await?;
        assert_eq!(stored.parent_id, txn.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_attach_to_foreign_record_is_denied() -> Result<()> {
        let db = setup_test_db().await?;
        let debt = create_test_debt(&db, 100.0).await?;

        let result = insert(&db, &Session::new(OTHER_USER), receipt("Debt", &debt.id)).await;
        assert!(matches!(result, Err(Error::Permission { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_or_unattachable_parent_type() -> Result<()> {
        let db = setup_test_db().await?;
        let session = Session::new(TEST_USER);

        assert!(matches!(
            insert(&db, &session, receipt("Invoice", "x")).await,
            Err(Error::Validation { .. })
        ));
        assert!(matches!(
            insert(&db, &session, receipt("Audit Log", "x")).await,
            Err(Error::Validation { .. })
        ));
        assert!(matches!(
            insert(&db, &session, receipt("Debt", "missing")).await,
            Err(Error::NotFound { .. })
        ));
        Ok(())
    }
}
