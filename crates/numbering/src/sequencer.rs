//! Next-number computation and display formatting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tradebill_core::{BillCategory, BillingResult, FinancialYear};

use crate::store::{NumberLookup, NumberQuery};

/// Minimum zero-padded width of the sequence part. Wider sequences are never
/// truncated (1042 formats as `K1042`).
const PAD_WIDTH: usize = 3;

/// How a category's sequence is scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberingMode {
    /// One sequence per category for the lifetime of the dataset: `K007`.
    Global,
    /// Sequence resets to 1 each April: `P/2025-26/003`.
    FinancialYearScoped,
}

/// Per-category mode assignment.
///
/// A category's mode must stay fixed for the lifetime of a dataset — mixing
/// modes within one category corrupts the maximum computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencerPolicy {
    pub cash: NumberingMode,
    pub credit: NumberingMode,
}

impl SequencerPolicy {
    pub fn mode_for(&self, category: BillCategory) -> NumberingMode {
        match category {
            BillCategory::Cash => self.cash,
            BillCategory::Credit => self.credit,
        }
    }
}

impl Default for SequencerPolicy {
    /// Cash memos run one global sequence; GST credit memos restart each
    /// financial year.
    fn default() -> Self {
        Self {
            cash: NumberingMode::Global,
            credit: NumberingMode::FinancialYearScoped,
        }
    }
}

/// An assigned bill number. Computed once at issuance, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BillNumber {
    pub category: BillCategory,
    /// Present only for financial-year-scoped numbers.
    pub financial_year: Option<FinancialYear>,
    pub sequence: u64,
}

impl BillNumber {
    /// Display-ready rendering: `K007` or `P/2025-26/003`.
    pub fn formatted(&self) -> String {
        match self.financial_year {
            None => format!("{}{:0PAD_WIDTH$}", self.category.prefix(), self.sequence),
            Some(fy) => format!(
                "{}/{}/{:0PAD_WIDTH$}",
                self.category.prefix(),
                fy.label(),
                self.sequence
            ),
        }
    }
}

impl core::fmt::Display for BillNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Computes the next bill number from the issued set and formats raw stored
/// values for display.
///
/// "Maximum issued + 1" is inherently racy across concurrent callers; this
/// type does not lock. The storage side must enforce uniqueness of the final
/// number so a race surfaces as
/// [`tradebill_core::BillingError::DuplicateNumber`] and the caller retries.
pub struct BillNumberSequencer<L> {
    lookup: L,
    policy: SequencerPolicy,
}

impl<L: NumberLookup> BillNumberSequencer<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_policy(lookup, SequencerPolicy::default())
    }

    pub fn with_policy(lookup: L, policy: SequencerPolicy) -> Self {
        Self { lookup, policy }
    }

    pub fn policy(&self) -> SequencerPolicy {
        self.policy
    }

    /// Compute the next number for a category.
    ///
    /// `reference_date` selects the financial year for scoped categories; it
    /// is ignored for globally sequenced ones. The first bill of a brand-new
    /// category or period gets sequence 1; scoped sequences never carry over
    /// from the prior year. Lookup failures propagate — they are never
    /// conflated with an empty issued set.
    pub fn next_bill_number(
        &self,
        category: BillCategory,
        reference_date: NaiveDate,
    ) -> BillingResult<BillNumber> {
        match self.policy.mode_for(category) {
            NumberingMode::Global => {
                let issued = self.lookup.issued_numbers(&NumberQuery::all_for(category))?;
                let max = max_sequence(&issued, category, |raw| parse_global(raw, category));
                Ok(BillNumber {
                    category,
                    financial_year: None,
                    sequence: max + 1,
                })
            }
            NumberingMode::FinancialYearScoped => {
                let fy = FinancialYear::from_date(reference_date);
                let issued = self
                    .lookup
                    .issued_numbers(&NumberQuery::for_period(category, fy))?;
                let max = max_sequence(&issued, category, |raw| parse_scoped(raw, category, fy));
                Ok(BillNumber {
                    category,
                    financial_year: Some(fy),
                    sequence: max + 1,
                })
            }
        }
    }

    /// Re-pad an already-issued raw value for display.
    ///
    /// Accepts the forms found in stored rows: a bare sequence (`"7"`), a
    /// prefixed sequence (`"K7"`), or a compound scoped number
    /// (`"P/2025-26/3"`). The original value is never reinterpreted, only
    /// padded.
    pub fn format_bill_number(&self, category: BillCategory, raw: &str) -> BillingResult<String> {
        format_raw(category, raw)
    }
}

/// Maximum parsed sequence across the issued set, 0 when none parse.
///
/// Malformed entries indicate data drift; they are skipped (never abort the
/// computation) and reported through a single warning.
fn max_sequence<F>(issued: &[String], category: BillCategory, parse: F) -> u64
where
    F: Fn(&str) -> Option<u64>,
{
    let mut max = 0u64;
    let mut skipped = 0usize;
    for raw in issued {
        match parse(raw) {
            Some(seq) => max = max.max(seq),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::warn!(
            category = %category,
            skipped,
            total = issued.len(),
            "skipped malformed stored bill numbers while computing next sequence"
        );
    }
    max
}

/// Parse a globally sequenced stored number: `K007` -> 7.
fn parse_global(raw: &str, category: BillCategory) -> Option<u64> {
    let rest = raw.strip_prefix(category.prefix())?;
    if rest.is_empty() {
        return None;
    }
    rest.parse().ok()
}

/// Parse a financial-year-scoped stored number: `P/2025-26/003` -> 3.
///
/// Numbers from other periods are not malformed, they are simply out of
/// scope; they parse to `None` all the same and are excluded from the max.
fn parse_scoped(raw: &str, category: BillCategory, fy: FinancialYear) -> Option<u64> {
    let mut parts = raw.split('/');
    let prefix = parts.next()?;
    let period = parts.next()?;
    let sequence = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if prefix.len() != 1 || !prefix.starts_with(category.prefix()) {
        return None;
    }
    if period != fy.label() {
        return None;
    }
    sequence.parse().ok()
}

fn format_raw(category: BillCategory, raw: &str) -> BillingResult<String> {
    use tradebill_core::BillingError;

    if raw.is_empty() {
        return Err(BillingError::validation("empty bill number"));
    }
    if raw.contains('/') {
        // Compound scoped value: pad the trailing sequence segment.
        let (head, seq) = raw
            .rsplit_once('/')
            .ok_or_else(|| BillingError::validation(format!("malformed bill number: {raw}")))?;
        let seq: u64 = seq
            .parse()
            .map_err(|_| BillingError::validation(format!("malformed bill number: {raw}")))?;
        return Ok(format!("{head}/{seq:0PAD_WIDTH$}"));
    }
    // Prefixed or bare sequence.
    let (prefix, digits) = match raw.strip_prefix(category.prefix()) {
        Some(rest) => (category.prefix(), rest),
        None => (category.prefix(), raw),
    };
    let seq: u64 = digits
        .parse()
        .map_err(|_| BillingError::validation(format!("malformed bill number: {raw}")))?;
    Ok(format!("{prefix}{seq:0PAD_WIDTH$}"))
}
