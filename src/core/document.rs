//! Document lifecycle - runs record hooks around persistence.
//!
//! Every write happens inside one database transaction:
//!
//! * [`insert`]: `before_insert` → id assignment → duplicate check →
//!   `normalize` → `validate` → persist → audit row → commit
//! * [`save`]: load → permission check → `normalize` → `validate` →
//!   persist → audit row → commit
//! * [`soft_delete`]: load → permission check → flag → persist → audit row → commit
//!
//! A hook returning `Err` drops the transaction, which rolls back every
//! statement issued so far.

use crate::{
    core::{audit, doctype::DocType, session::Session},
    entities,
    errors::{Error, Result},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    TransactionTrait,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Storage-facing half of a record: field access shared by every entity
/// model plus load/persist against any connection.
#[async_trait]
pub trait Document: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Record type of this model
    const DOCTYPE: DocType;

    /// Record name
    fn id(&self) -> &str;
    /// Replaces the record name
    fn set_id(&mut self, id: String);
    /// Owning user
    fn owner(&self) -> &str;
    /// Replaces the owning user
    fn set_owner(&mut self, user: String);
    /// Identifier supplied by an offline client
    fn client_id(&self) -> Option<&str>;
    /// Soft delete flag
    fn is_deleted(&self) -> bool;
    /// Sets the soft delete flag
    fn set_deleted(&mut self, deleted: bool);
    /// Creation timestamp
    fn created_at(&self) -> DateTime<Utc>;
    /// Stamps both timestamps
    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>);

    /// Loads a record by id, including soft-deleted ones.
    async fn load<C>(db: &C, id: &str) -> Result<Option<Self>>
    where
        C: ConnectionTrait;

    /// Writes every column of the record.
    async fn persist<C>(self, db: &C, insert: bool) -> Result<Self>
    where
        C: ConnectionTrait;
}

/// Business-rule half of a record: the hooks the lifecycle calls.
#[async_trait]
pub trait Controller: Document {
    /// Whether writes produce an audit log row
    const AUDITED: bool = true;

    /// Stamps the owner from the session when absent and adopts a
    /// client-supplied identifier as the record id when none is set.
    fn before_insert(&mut self, session: &Session) {
        if self.owner().trim().is_empty() {
            self.set_owner(session.user().to_owned());
        }
        if self.id().trim().is_empty() {
            let adopted = self
                .client_id()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_owned);
            if let Some(client_id) = adopted {
                self.set_id(client_id);
            }
        }
    }

    /// Rewrites legacy or sloppy input before validation.
    fn normalize(&mut self) {}

    /// Field-level and cross-record checks.
    async fn validate(&self, _txn: &DatabaseTransaction) -> Result<()> {
        Ok(())
    }
}

macro_rules! impl_document {
    ($($module:ident => $doctype:ident),+ $(,)?) => {
        $(
            #[async_trait]
            impl Document for entities::$module::Model {
                const DOCTYPE: DocType = DocType::$doctype;

                fn id(&self) -> &str {
                    &self.id
                }

                fn set_id(&mut self, id: String) {
                    self.id = id;
                }

                fn owner(&self) -> &str {
                    &self.user
                }

                fn set_owner(&mut self, user: String) {
                    self.user = user;
                }

                fn client_id(&self) -> Option<&str> {
                    self.client_id.as_deref()
                }

                fn is_deleted(&self) -> bool {
                    self.is_deleted
                }

                fn set_deleted(&mut self, deleted: bool) {
                    self.is_deleted = deleted;
                }

                fn created_at(&self) -> DateTime<Utc> {
                    self.created_at
                }

                fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
                    self.created_at = created_at;
                    self.updated_at = updated_at;
                }

                async fn load<C>(db: &C, id: &str) -> Result<Option<Self>>
                where
                    C: ConnectionTrait,
                {
                    entities::$module::Entity::find_by_id(id.to_owned())
                        .one(db)
                        .await
                        .map_err(Into::into)
                }

                async fn persist<C>(self, db: &C, insert: bool) -> Result<Self>
                where
                    C: ConnectionTrait,
                {
                    let active = entities::$module::ActiveModel::from(self).reset_all();
                    let saved = if insert {
                        active.insert(db).await?
                    } else {
                        active.update(db).await?
                    };
                    Ok(saved)
                }
            }
        )+
    };
}

impl_document! {
    wallet => Wallet,
    account => Account,
    bucket => Bucket,
    category => Category,
    transaction => Transaction,
    budget => Budget,
    debt => Debt,
    debt_installment => DebtInstallment,
    debt_request => DebtRequest,
    fx_rate => FxRate,
    custom_currency => CustomCurrency,
    jameya => Jameya,
    jameya_payment => JameyaPayment,
    allocation_rule => AllocationRule,
    allocation_line => AllocationLine,
    attachment => Attachment,
    audit_log => AuditLog,
    sync_op => SyncOp,
    settings => Settings,
}

/// Inserts a new record, running `before_insert`, `normalize` and `validate`.
///
/// # Errors
/// Returns the first hook error, [`Error::Duplicate`] when the resolved id is
/// taken, [`Error::Permission`] when the record claims another owner, or a
/// database error. Nothing is written in any of those cases.
#[instrument(skip(db, session, doc), fields(doctype = %D::DOCTYPE, user = session.user()))]
pub async fn insert<D: Controller>(db: &DatabaseConnection, session: &Session, doc: D) -> Result<D> {
    let txn = db.begin().await?;
    let saved = insert_in(&txn, session, doc).await?;
    if D::AUDITED {
        audit::record(&txn, session, &saved, audit::AuditAction::Insert).await?;
    }
    txn.commit().await?;
    info!(id = saved.id(), "Inserted {}", D::DOCTYPE);
    Ok(saved)
}

/// Insert path without its own transaction or audit row.
pub(crate) async fn insert_in<D: Controller>(
    txn: &DatabaseTransaction,
    session: &Session,
    mut doc: D,
) -> Result<D> {
    doc.before_insert(session);
    if !session.can_write(doc.owner()) {
        return Err(Error::permission(format!(
            "Not allowed to create {} for {}",
            D::DOCTYPE,
            doc.owner()
        )));
    }
    if doc.id().trim().is_empty() {
        doc.set_id(Uuid::new_v4().to_string());
    }
    if D::load(txn, doc.id()).await?.is_some() {
        return Err(Error::Duplicate {
            doctype: D::DOCTYPE.label().to_owned(),
            id: doc.id().to_owned(),
        });
    }

    let now = Utc::now();
    doc.set_timestamps(now, now);
    doc.set_deleted(false);
    doc.normalize();
    doc.validate(txn).await?;
    debug!(id = doc.id(), "Validated new {}", D::DOCTYPE);

    doc.persist(txn, true).await
}

/// Saves changes to an existing record, running `normalize` and `validate`.
///
/// The owner and creation timestamp are always taken from the stored record.
///
/// # Errors
/// Returns [`Error::NotFound`] for missing or deleted records,
/// [`Error::Permission`] when the session does not own the record, the first
/// hook error, or a database error.
#[instrument(skip(db, session, doc), fields(doctype = %D::DOCTYPE, user = session.user()))]
pub async fn save<D: Controller>(db: &DatabaseConnection, session: &Session, mut doc: D) -> Result<D> {
    let txn = db.begin().await?;
    let existing = load_writable::<D, _>(&txn, session, doc.id()).await?;

    doc.set_owner(existing.owner().to_owned());
    doc.set_timestamps(existing.created_at(), Utc::now());
    doc.set_deleted(false);
    doc.normalize();
    doc.validate(&txn).await?;

    let saved = doc.persist(&txn, false).await?;
    if D::AUDITED {
        audit::record(&txn, session, &saved, audit::AuditAction::Update).await?;
    }
    txn.commit().await?;
    info!(id = saved.id(), "Saved {}", D::DOCTYPE);
    Ok(saved)
}

/// Marks a record as deleted. Deleting an already deleted record is a no-op.
///
/// # Errors
/// Returns [`Error::NotFound`] when the record never existed,
/// [`Error::Permission`] when the session does not own it, or a database error.
#[instrument(skip(db, session), fields(doctype = %D::DOCTYPE, user = session.user()))]
pub async fn soft_delete<D: Controller>(
    db: &DatabaseConnection,
    session: &Session,
    id: &str,
) -> Result<D> {
    let txn = db.begin().await?;
    let mut doc = D::load(&txn, id)
        .await?
        .ok_or_else(|| Error::not_found(D::DOCTYPE.label(), id))?;
    if !session.can_write(doc.owner()) {
        return Err(Error::permission(format!(
            "Not allowed to delete {} {id}",
            D::DOCTYPE
        )));
    }
    if doc.is_deleted() {
        debug!(id, "{} already deleted", D::DOCTYPE);
        return Ok(doc);
    }

    doc.set_deleted(true);
    let created_at = doc.created_at();
    doc.set_timestamps(created_at, Utc::now());
    let saved = doc.persist(&txn, false).await?;
    if D::AUDITED {
        audit::record(&txn, session, &saved, audit::AuditAction::Delete).await?;
    }
    txn.commit().await?;
    info!(id, "Deleted {}", D::DOCTYPE);
    Ok(saved)
}

/// Fetches a live record the session may read.
///
/// # Errors
/// Returns [`Error::NotFound`] for missing or deleted records and
/// [`Error::Permission`] for records owned by someone else.
pub async fn get<D: Document>(db: &DatabaseConnection, session: &Session, id: &str) -> Result<D> {
    load_writable::<D, _>(db, session, id).await
}

async fn load_writable<D, C>(db: &C, session: &Session, id: &str) -> Result<D>
where
    D: Document,
    C: ConnectionTrait,
{
    let doc = D::load(db, id)
        .await?
        .filter(|doc| !doc.is_deleted())
        .ok_or_else(|| Error::not_found(D::DOCTYPE.label(), id))?;
    if !session.can_write(doc.owner()) {
        return Err(Error::permission(format!(
            "Not allowed to access {} {id}",
            D::DOCTYPE
        )));
    }
    Ok(doc)
}
