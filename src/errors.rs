//! Unified error type for record hooks, the lifecycle, patches and the HTTP layer.

use thiserror::Error;

/// Every failure a hook or the lifecycle can raise.
///
/// Validation and permission failures abort the enclosing database
/// transaction; the HTTP layer maps them to client errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A business rule was violated
    #[error("{message}")]
    Validation {
        /// Human readable reason
        message: String,
    },

    /// The session user may not touch the record
    #[error("{message}")]
    Permission {
        /// Human readable reason
        message: String,
    },

    /// An amount was zero, negative or not finite
    #[error("Invalid amount for {field}: {amount}")]
    InvalidAmount {
        /// Field holding the amount
        field: &'static str,
        /// Offending value
        amount: f64,
    },

    /// The referenced record does not exist or is deleted
    #[error("{doctype} {id} not found")]
    NotFound {
        /// Record type label
        doctype: String,
        /// Record id
        id: String,
    },

    /// A record with the same id already exists
    #[error("{doctype} {id} already exists")]
    Duplicate {
        /// Record type label
        doctype: String,
        /// Record id
        id: String,
    },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable reason
        message: String,
    },

    /// Query or connection failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Socket or file failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a [`Error::Permission`].
    pub fn permission(message: impl Into<String>) -> Self {
        Self::Permission {
            message: message.into(),
        }
    }

    /// Shorthand for a [`Error::NotFound`].
    pub fn not_found(doctype: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            doctype: doctype.into(),
            id: id.into(),
        }
    }

    /// Exception class name reported to API clients.
    #[must_use]
    pub const fn exc_type(&self) -> &'static str {
        match self {
            Self::Validation { .. } | Self::InvalidAmount { .. } => "ValidationError",
            Self::Permission { .. } => "PermissionError",
            Self::NotFound { .. } => "DoesNotExistError",
            Self::Duplicate { .. } => "DuplicateEntryError",
            Self::Config { .. }
            | Self::Database(_)
            | Self::Io(_)
            | Self::Json(_) => "InternalError",
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exc_type_for_domain_errors() {
        assert_eq!(Error::validation("bad").exc_type(), "ValidationError");
        assert_eq!(
            Error::InvalidAmount {
                field: "amount",
                amount: -1.0
            }
            .exc_type(),
            "ValidationError"
        );
        assert_eq!(Error::permission("no").exc_type(), "PermissionError");
        assert_eq!(Error::not_found("Debt", "x").exc_type(), "DoesNotExistError");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::validation("Percent too high").to_string(), "Percent too high");
        assert_eq!(Error::not_found("Debt", "d1").to_string(), "Debt d1 not found");
    }
}
