//! Amount-in-words rendering (Indian numbering).
//!
//! This crate contains the single canonical words converter used on bill
//! faces and PDF output, implemented purely as deterministic domain logic
//! (no IO, no caching, no storage).

pub mod amount_words;

pub use amount_words::{amount_to_words, rupees_to_words};
