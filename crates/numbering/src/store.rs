//! Issued-number lookup port.

use tradebill_core::{BillCategory, BillingResult, FinancialYear};

/// Scope of an issued-numbers query.
///
/// `financial_year: None` asks for every number issued under the category;
/// `Some(fy)` narrows to numbers carrying that period segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberQuery {
    pub category: BillCategory,
    pub financial_year: Option<FinancialYear>,
}

impl NumberQuery {
    pub fn all_for(category: BillCategory) -> Self {
        Self {
            category,
            financial_year: None,
        }
    }

    pub fn for_period(category: BillCategory, financial_year: FinancialYear) -> Self {
        Self {
            category,
            financial_year: Some(financial_year),
        }
    }
}

/// Query capability over previously issued bill numbers.
///
/// Implementations return the raw stored strings; the sequencer does its own
/// parsing and skips entries that do not match the expected format. A failed
/// query must surface as [`tradebill_core::BillingError::LookupFailed`] —
/// returning an empty list for a failure would silently restart the sequence
/// at 1.
pub trait NumberLookup {
    fn issued_numbers(&self, query: &NumberQuery) -> BillingResult<Vec<String>>;
}

impl<L: NumberLookup + ?Sized> NumberLookup for &L {
    fn issued_numbers(&self, query: &NumberQuery) -> BillingResult<Vec<String>> {
        (**self).issued_numbers(query)
    }
}
