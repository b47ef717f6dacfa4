//! Bill number assignment and formatting.
//!
//! One sequencer replaces the page-local numbering scattered through the old
//! bill pages. The issued-numbers lookup is injected as a port so the
//! sequencer stays pure and testable; uniqueness of the final number is the
//! storage side's job (see `tradebill-infra` for the retry flow).

pub mod sequencer;
pub mod store;

pub use sequencer::{BillNumber, BillNumberSequencer, NumberingMode, SequencerPolicy};
pub use store::{NumberLookup, NumberQuery};
