//! Report aggregation for bill books and CA summaries.
//!
//! Pure computation over issued bills: period filtering, bill-book totals,
//! party-wise summaries, and the GST breakdown the CA report prints. The PDF
//! and HTML layers that present these numbers are external collaborators.

pub mod summary;

pub use summary::{
    month_name, BillBookSummary, CategoryFilter, GstBreakdownTotals, PartySummary, ReportPeriod,
};
