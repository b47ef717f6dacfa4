//! Infrastructure adapters: bill registers and the issue flow.
//!
//! The domain crates stay pure; this crate supplies the storage-side ports
//! (an in-memory register with the uniqueness constraint the numbering
//! design relies on) and the bounded-retry orchestration that assigns a
//! number and inserts atomically enough to survive a lost race.

pub mod issue;
pub mod register;


pub use issue::issue_bill_with_retry;
pub use register::{BillRegister, InMemoryBillRegister};
