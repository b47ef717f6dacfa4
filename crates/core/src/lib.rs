//! `tradebill-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the billing error model, paise-scaled money, bill categories, and the
//! April–March financial-year period.

pub mod category;
pub mod error;
pub mod fiscal;
pub mod money;

pub use category::BillCategory;
pub use error::{BillingError, BillingResult};
pub use fiscal::FinancialYear;
pub use money::Money;
