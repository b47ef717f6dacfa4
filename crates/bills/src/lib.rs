//! Bills domain module (kacchi and pakki memos).
//!
//! This crate contains business rules for bills and their parties,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). A bill is validated and totalled once at issuance and is
//! immutable afterwards.

pub mod bill;
pub mod party;

pub use bill::{BankDetails, Bill, BillDraft, BillItem, GstBreakup, GstRates};
pub use party::Party;
