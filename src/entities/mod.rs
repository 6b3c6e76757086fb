//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the record tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod account;
pub mod allocation_line;
pub mod allocation_rule;
pub mod attachment;
pub mod audit_log;
pub mod bucket;
pub mod budget;
pub mod category;
pub mod custom_currency;
pub mod debt;
pub mod debt_installment;
pub mod debt_request;
pub mod fx_rate;
pub mod jameya;
pub mod jameya_payment;
pub mod settings;
pub mod sync_op;
pub mod transaction;
pub mod wallet;

// Re-export specific types to avoid conflicts
pub use account::Entity as Account;
pub use allocation_line::Entity as AllocationLine;
pub use allocation_rule::Entity as AllocationRule;
pub use attachment::Entity as Attachment;
pub use audit_log::Entity as AuditLog;
pub use bucket::Entity as Bucket;
pub use budget::Entity as Budget;
pub use category::Entity as Category;
pub use custom_currency::Entity as CustomCurrency;
pub use debt::Entity as Debt;
pub use debt_installment::Entity as DebtInstallment;
pub use debt_request::Entity as DebtRequest;
pub use fx_rate::Entity as FxRate;
pub use jameya::Entity as Jameya;
pub use jameya_payment::Entity as JameyaPayment;
pub use settings::Entity as Settings;
pub use sync_op::Entity as SyncOp;
pub use transaction::Entity as Transaction;
pub use wallet::Entity as Wallet;
