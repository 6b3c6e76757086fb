//! List view settings.
//!
//! Static per-record-type metadata that list screens use: which fields to
//! show, the default sort, and how a status field maps to a coloured
//! indicator.

use crate::core::DocType;
use serde::Serialize;
use serde_json::Value;

/// Indicator colours understood by list screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    /// Done or incoming
    Green,
    /// Outgoing or refused
    Red,
    /// Waiting on someone
    Orange,
    /// Neutral movement
    Blue,
    /// Inactive or deleted
    Gray,
}

/// Default list ordering
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest or smallest first
    Asc,
    /// Newest or largest first
    Desc,
}

/// A status value and the indicator shown for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IndicatorRule {
    /// Field value; booleans are matched as `"true"` / `"false"`
    pub value: &'static str,
    /// Text shown next to the indicator
    pub label: &'static str,
    /// Colour shown
    pub indicator: Indicator,
}

/// List view configuration for one record type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ListViewSettings {
    /// Record type these settings describe
    pub doctype: DocType,
    /// Columns shown in the list, in order
    pub fields: &'static [&'static str],
    /// Field lists are sorted by
    pub sort_field: &'static str,
    /// Direction of the default sort
    pub sort_order: SortOrder,
    /// Field whose value drives the indicator
    pub status_field: Option<&'static str>,
    /// Value mappings for `status_field`
    pub indicators: &'static [IndicatorRule],
}

const fn rule(value: &'static str, label: &'static str, indicator: Indicator) -> IndicatorRule {
    IndicatorRule {
        value,
        label,
        indicator,
    }
}

const TRANSACTION_INDICATORS: &[IndicatorRule] = &[
    rule("income", "Income", Indicator::Green),
    rule("expense", "Expense", Indicator::Red),
    rule("transfer", "Transfer", Indicator::Blue),
];

const DEBT_INDICATORS: &[IndicatorRule] = &[
    rule("open", "Open", Indicator::Orange),
    rule("settled", "Settled", Indicator::Green),
];

const INSTALLMENT_INDICATORS: &[IndicatorRule] = &[
    rule("true", "Paid", Indicator::Green),
    rule("false", "Unpaid", Indicator::Orange),
];

const REQUEST_INDICATORS: &[IndicatorRule] = &[
    rule("pending", "Pending", Indicator::Orange),
    rule("accepted", "Accepted", Indicator::Green),
    rule("rejected", "Rejected", Indicator::Red),
];

const RULE_INDICATORS: &[IndicatorRule] = &[
    rule("true", "Active", Indicator::Green),
    rule("false", "Inactive", Indicator::Gray),
];

const SYNC_INDICATORS: &[IndicatorRule] = &[
    rule("pending", "Pending", Indicator::Orange),
    rule("applied", "Applied", Indicator::Green),
    rule("failed", "Failed", Indicator::Red),
];

const WALLET_INDICATORS: &[IndicatorRule] = &[rule("true", "Default", Indicator::Blue)];

const fn plain(
    doctype: DocType,
    fields: &'static [&'static str],
    sort_field: &'static str,
    sort_order: SortOrder,
) -> ListViewSettings {
    ListViewSettings {
        doctype,
        fields,
        sort_field,
        sort_order,
        status_field: None,
        indicators: &[],
    }
}

const fn with_status(
    settings: ListViewSettings,
    status_field: &'static str,
    indicators: &'static [IndicatorRule],
) -> ListViewSettings {
    ListViewSettings {
        status_field: Some(status_field),
        indicators,
        ..settings
    }
}

/// Returns the list view settings for `doctype`.
#[must_use]
pub const fn settings(doctype: DocType) -> ListViewSettings {
    use SortOrder::{Asc, Desc};
    match doctype {
        DocType::Wallet => with_status(
            plain(doctype, &["name", "base_currency", "is_default"], "name", Asc),
            "is_default",
            WALLET_INDICATORS,
        ),
        DocType::Account => plain(
            doctype,
            &["name", "account_type", "currency", "opening_balance"],
            "name",
            Asc,
        ),
        DocType::Bucket => plain(doctype, &["name", "target_amount", "color"], "name", Asc),
        DocType::Category => plain(doctype, &["name", "kind", "parent_category"], "name", Asc),
        DocType::Transaction => with_status(
            plain(
                doctype,
                &["posting_date", "kind", "account", "amount", "currency", "category"],
                "posting_date",
                Desc,
            ),
            "kind",
            TRANSACTION_INDICATORS,
        ),
        DocType::Budget => plain(
            doctype,
            &["category", "amount", "currency", "period", "start_date"],
            "start_date",
            Desc,
        ),
        DocType::Debt => with_status(
            plain(
                doctype,
                &["counterparty", "direction", "principal", "currency", "due_date", "status"],
                "due_date",
                Asc,
            ),
            "status",
            DEBT_INDICATORS,
        ),
        DocType::DebtInstallment => with_status(
            plain(doctype, &["debt", "amount", "due_date", "is_paid"], "due_date", Asc),
            "is_paid",
            INSTALLMENT_INDICATORS,
        ),
        DocType::DebtRequest => with_status(
            plain(
                doctype,
                &["to_user", "amount", "currency", "status", "debt"],
                "created_at",
                Desc,
            ),
            "status",
            REQUEST_INDICATORS,
        ),
        DocType::FxRate => plain(
            doctype,
            &["from_currency", "to_currency", "rate", "as_of"],
            "as_of",
            Desc,
        ),
        DocType::CustomCurrency => plain(
            doctype,
            &["code", "currency_name", "symbol", "decimals"],
            "code",
            Asc,
        ),
        DocType::Jameya => plain(
            doctype,
            &["name", "installment_amount", "members_count", "my_turn", "start_date"],
            "start_date",
            Desc,
        ),
        DocType::JameyaPayment => plain(
            doctype,
            &["jameya", "period_no", "amount", "paid_on"],
            "period_no",
            Asc,
        ),
        DocType::AllocationRule => with_status(
            plain(doctype, &["rule_name", "is_active"], "rule_name", Asc),
            "is_active",
            RULE_INDICATORS,
        ),
        DocType::AllocationLine => plain(doctype, &["rule", "bucket", "percent"], "rule", Asc),
        DocType::Attachment => plain(
            doctype,
            &["file_name", "parent_doctype", "parent_id", "file_size"],
            "created_at",
            Desc,
        ),
        DocType::AuditLog => plain(
            doctype,
            &["ref_doctype", "ref_id", "action", "created_at"],
            "created_at",
            Desc,
        ),
        DocType::SyncOp => with_status(
            plain(
                doctype,
                &["client_id", "op", "ref_doctype", "ref_id", "status"],
                "created_at",
                Asc,
            ),
            "status",
            SYNC_INDICATORS,
        ),
        DocType::Settings => plain(
            doctype,
            &["user", "default_currency", "default_wallet", "week_start"],
            "user",
            Asc,
        ),
    }
}

/// Resolves the indicator for a record rendered as JSON.
///
/// Deleted records are always gray. Returns `None` when the type has no
/// status field or the value has no mapping.
#[must_use]
pub fn indicator_for(doctype: DocType, record: &Value) -> Option<(&'static str, Indicator)> {
    if record.get("is_deleted").and_then(Value::as_bool) == Some(true) {
        return Some(("Deleted", Indicator::Gray));
    }
    let settings = settings(doctype);
    let value = match record.get(settings.status_field?)? {
        Value::String(s) => s.trim().to_lowercase(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    settings
        .indicators
        .iter()
        .find(|rule| rule.value == value)
        .map(|rule| (rule.label, rule.indicator))
}
