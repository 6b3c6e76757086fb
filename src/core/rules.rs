//! Guard clauses shared by the record controllers.
//!
//! Each helper either returns `Ok(())` (or the checked value) or the domain
//! error that aborts the enclosing transaction.

use crate::{
    core::document::Document,
    entities::{custom_currency, wallet},
    errors::{Error, Result},
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tolerance used when comparing summed amounts and percentages.
pub const EPSILON: f64 = 1e-9;

/// Rejects empty or whitespace-only text.
pub fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Rejects zero, negative and non-finite amounts.
pub fn require_positive(field: &'static str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidAmount { field, amount });
    }
    Ok(())
}

/// Rejects negative and non-finite amounts; zero is allowed.
pub fn require_non_negative(field: &'static str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { field, amount });
    }
    Ok(())
}

/// Rejects values outside a fixed set of options.
pub fn require_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(Error::validation(format!(
        "{field} must be one of {}, got '{value}'",
        allowed.join(", ")
    )))
}

/// Loads a linked record and checks it is live and owned by `owner`.
///
/// Used for every child → parent and record → link reference.
///
/// # Errors
/// [`Error::NotFound`] when the record is missing or soft-deleted,
/// [`Error::Permission`] when it belongs to another user.
pub async fn fetch_linked<D, C>(db: &C, id: &str, owner: &str) -> Result<D>
where
    D: Document,
    C: ConnectionTrait,
{
    let linked = D::load(db, id)
        .await?
        .filter(|doc| !doc.is_deleted())
        .ok_or_else(|| Error::not_found(D::DOCTYPE.label(), id))?;
    if linked.owner() != owner {
        return Err(Error::permission(format!(
            "{} {id} does not belong to {owner}",
            D::DOCTYPE
        )));
    }
    Ok(linked)
}

/// Checks an optional link; `None` and empty ids pass.
pub async fn check_optional_link<D, C>(db: &C, id: Option<&str>, owner: &str) -> Result<()>
where
    D: Document,
    C: ConnectionTrait,
{
    match id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => fetch_linked::<D, C>(db, id, owner).await.map(|_| ()),
        None => Ok(()),
    }
}

/// Checks the `wallet_id` of a wallet-scoped record.
pub async fn check_wallet<C>(db: &C, wallet_id: Option<&str>, owner: &str) -> Result<()>
where
    C: ConnectionTrait,
{
    check_optional_link::<wallet::Model, C>(db, wallet_id, owner).await
}

/// Three uppercase ASCII letters, e.g. `USD`, `EGP`.
#[must_use]
pub fn is_iso_currency(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Accepts ISO-style codes and live custom currencies owned by `owner`.
///
/// # Errors
/// [`Error::Validation`] for empty or unknown codes.
pub async fn check_currency<C>(db: &C, code: &str, owner: &str) -> Result<()>
where
    C: ConnectionTrait,
{
    require_text("Currency", code)?;
    if is_iso_currency(code) {
        return Ok(());
    }
    let custom = custom_currency::Entity::find()
        .filter(custom_currency::Column::User.eq(owner))
        .filter(custom_currency::Column::Code.eq(code))
        .filter(custom_currency::Column::IsDeleted.eq(false))
        .count(db)
        .await?;
    if custom == 0 {
        return Err(Error::validation(format!("Unknown currency '{code}'")));
    }
    Ok(())
}
