//! Record type registry.
//!
//! Maps the human label used by clients and audit rows ("Debt Installment")
//! to the URL slug, the table name, and whether records carry a `wallet_id`.

use serde::Serialize;
use std::fmt;

/// Every record type this crate manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DocType {
    /// See [`crate::entities::wallet`]
    Wallet,
    /// See [`crate::entities::account`]
    Account,
    /// See [`crate::entities::bucket`]
    Bucket,
    /// See [`crate::entities::category`]
    Category,
    /// See [`crate::entities::transaction`]
    Transaction,
    /// See [`crate::entities::budget`]
    Budget,
    /// See [`crate::entities::debt`]
    Debt,
    /// See [`crate::entities::debt_installment`]
    DebtInstallment,
    /// See [`crate::entities::debt_request`]
    DebtRequest,
    /// See [`crate::entities::fx_rate`]
    FxRate,
    /// See [`crate::entities::custom_currency`]
    CustomCurrency,
    /// See [`crate::entities::jameya`]
    Jameya,
    /// See [`crate::entities::jameya_payment`]
    JameyaPayment,
    /// See [`crate::entities::allocation_rule`]
    AllocationRule,
    /// See [`crate::entities::allocation_line`]
    AllocationLine,
    /// See [`crate::entities::attachment`]
    Attachment,
    /// See [`crate::entities::audit_log`]
    AuditLog,
    /// See [`crate::entities::sync_op`]
    SyncOp,
    /// See [`crate::entities::settings`]
    Settings,
}

impl DocType {
    /// All record types, in schema creation order.
    pub const ALL: [Self; 19] = [
        Self::Wallet,
        Self::Account,
        Self::Bucket,
        Self::Category,
        Self::Transaction,
        Self::Budget,
        Self::Debt,
        Self::DebtInstallment,
        Self::DebtRequest,
        Self::FxRate,
        Self::CustomCurrency,
        Self::Jameya,
        Self::JameyaPayment,
        Self::AllocationRule,
        Self::AllocationLine,
        Self::Attachment,
        Self::AuditLog,
        Self::SyncOp,
        Self::Settings,
    ];

    /// Human readable label, as stored in `ref_doctype` / `parent_doctype` columns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wallet => "Wallet",
            Self::Account => "Account",
            Self::Bucket => "Bucket",
            Self::Category => "Category",
            Self::Transaction => "Transaction",
            Self::Budget => "Budget",
            Self::Debt => "Debt",
            Self::DebtInstallment => "Debt Installment",
            Self::DebtRequest => "Debt Request",
            Self::FxRate => "FX Rate",
            Self::CustomCurrency => "Custom Currency",
            Self::Jameya => "Jameya",
            Self::JameyaPayment => "Jameya Payment",
            Self::AllocationRule => "Allocation Rule",
            Self::AllocationLine => "Allocation Line",
            Self::Attachment => "Attachment",
            Self::AuditLog => "Audit Log",
            Self::SyncOp => "Sync Op",
            Self::Settings => "Settings",
        }
    }

    /// URL slug: the label lowercased with spaces replaced by dashes.
    #[must_use]
    pub fn slug(self) -> String {
        self.label().to_ascii_lowercase().replace(' ', "-")
    }

    /// Backing table name.
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Wallet => "wallets",
            Self::Account => "accounts",
            Self::Bucket => "buckets",
            Self::Category => "categories",
            Self::Transaction => "transactions",
            Self::Budget => "budgets",
            Self::Debt => "debts",
            Self::DebtInstallment => "debt_installments",
            Self::DebtRequest => "debt_requests",
            Self::FxRate => "fx_rates",
            Self::CustomCurrency => "custom_currencies",
            Self::Jameya => "jameyas",
            Self::JameyaPayment => "jameya_payments",
            Self::AllocationRule => "allocation_rules",
            Self::AllocationLine => "allocation_lines",
            Self::Attachment => "attachments",
            Self::AuditLog => "audit_logs",
            Self::SyncOp => "sync_ops",
            Self::Settings => "settings",
        }
    }

    /// Whether records of this type carry a `wallet_id` column.
    #[must_use]
    pub const fn is_wallet_scoped(self) -> bool {
        matches!(
            self,
            Self::Account
                | Self::Bucket
                | Self::Category
                | Self::Transaction
                | Self::Budget
                | Self::Debt
                | Self::Jameya
                | Self::AllocationRule
        )
    }

    /// Resolves a label such as `"Debt Request"`. Matching ignores ASCII case.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|doctype| doctype.label().eq_ignore_ascii_case(label))
    }

    /// Resolves a URL slug such as `"debt-request"`.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|doctype| doctype.slug() == slug)
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Runs `$body` with `$model` aliased to the entity model of `$doctype`.
macro_rules! for_doctype {
    ($doctype:expr, $model:ident => $body:expr) => {
        match $doctype {
            $crate::core::doctype::DocType::Wallet => {
                type $model = $crate::entities::wallet::Model;
                $body
            }
            $crate::core::doctype::DocType::Account => {
                type $model = $crate::entities::account::Model;
                $body
            }
            $crate::core::doctype::DocType::Bucket => {
                type $model = $crate::entities::bucket::Model;
                $body
            }
            $crate::core::doctype::DocType::Category => {
                type $model = $crate::entities::category::Model;
                $body
            }
            $crate::core::doctype::DocType::Transaction => {
                type $model = $crate::entities::transaction::Model;
                $body
            }
            $crate::core::doctype::DocType::Budget => {
                type $model = $crate::entities::budget::Model;
                $body
            }
            $crate::core::doctype::DocType::Debt => {
                type $model = $crate::entities::debt::Model;
                $body
            }
            $crate::core::doctype::DocType::DebtInstallment => {
                type $model = $crate::entities::debt_installment::Model;
                $body
            }
            $crate::core::doctype::DocType::DebtRequest => {
                type $model = $crate::entities::debt_request::Model;
                $body
            }
            $crate::core::doctype::DocType::FxRate => {
                type $model = $crate::entities::fx_rate::Model;
                $body
            }
            $crate::core::doctype::DocType::CustomCurrency => {
                type $model = $crate::entities::custom_currency::Model;
                $body
            }
            $crate::core::doctype::DocType::Jameya => {
                type $model = $crate::entities::jameya::Model;
                $body
            }
            $crate::core::doctype::DocType::JameyaPayment => {
                type $model = $crate::entities::jameya_payment::Model;
                $body
            }
            $crate::core::doctype::DocType::AllocationRule => {
                type $model = $crate::entities::allocation_rule::Model;
                $body
            }
            $crate::core::doctype::DocType::AllocationLine => {
                type $model = $crate::entities::allocation_line::Model;
                $body
            }
            $crate::core::doctype::DocType::Attachment => {
                type $model = $crate::entities::attachment::Model;
                $body
            }
            $crate::core::doctype::DocType::AuditLog => {
                type $model = $crate::entities::audit_log::Model;
                $body
            }
            $crate::core::doctype::DocType::SyncOp => {
                type $model = $crate::entities::sync_op::Model;
                $body
            }
            $crate::core::doctype::DocType::Settings => {
                type $model = $crate::entities::settings::Model;
                $body
            }
        }
    };
}

pub(crate) use for_doctype;
