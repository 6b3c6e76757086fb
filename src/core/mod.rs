//! Record controllers and the lifecycle that runs them.
//!
//! Each entity model implements [`document::Controller`]; the hooks live in
//! the module named after the record family.

pub mod account;
pub mod allocation;
pub mod attachment;
pub mod audit;
pub mod budget;
pub mod currency;
pub mod debt;
pub mod doctype;
pub mod document;
pub mod jameya;
pub mod rules;
pub mod session;
pub mod sync;
pub mod transaction;
pub mod wallet;

pub use doctype::DocType;
pub use document::{Controller, Document};
pub use session::Session;
