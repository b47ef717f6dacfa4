//! Financial-year period (April 1 – March 31).

use core::str::FromStr;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::BillingError;

/// A financial year identified by its starting calendar year.
///
/// Dates in April or later belong to the financial year starting that calendar
/// year; January–March belong to the one that started the year before. Labeled
/// as `"2025-26"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinancialYear(i32);

impl FinancialYear {
    /// Financial year containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        if date.month() >= 4 {
            Self(date.year())
        } else {
            Self(date.year() - 1)
        }
    }

    /// Financial year starting April 1 of the given calendar year.
    pub fn starting(year: i32) -> Self {
        Self(year)
    }

    /// Calendar year the period starts in.
    pub fn start_year(&self) -> i32 {
        self.0
    }

    /// `"2025-26"` style label used in bill numbers and report headers.
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.0, (self.0 + 1).rem_euclid(100))
    }

    /// First day of the period (April 1).
    pub fn start(&self) -> NaiveDate {
        // April 1 exists in every year.
        NaiveDate::from_ymd_opt(self.0, 4, 1).unwrap()
    }

    /// Last day of the period (March 31 of the following year).
    pub fn end(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0 + 1, 3, 31).unwrap()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }

    /// The following financial year.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for FinancialYear {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, suffix) = s
            .split_once('-')
            .ok_or_else(|| BillingError::validation(format!("malformed financial year: {s}")))?;
        let start: i32 = start
            .parse()
            .map_err(|_| BillingError::validation(format!("malformed financial year: {s}")))?;
        let suffix: i32 = suffix
            .parse()
            .map_err(|_| BillingError::validation(format!("malformed financial year: {s}")))?;
        if suffix != (start + 1).rem_euclid(100) {
            return Err(BillingError::validation(format!(
                "financial year suffix does not follow start year: {s}"
            )));
        }
        Ok(Self(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn april_starts_a_new_period() {
        assert_eq!(FinancialYear::from_date(date(2025, 4, 1)).label(), "2025-26");
        assert_eq!(FinancialYear::from_date(date(2025, 3, 31)).label(), "2024-25");
        assert_eq!(FinancialYear::from_date(date(2025, 5, 15)).label(), "2025-26");
    }

    #[test]
    fn same_period_shares_numbering_scope() {
        let a = FinancialYear::from_date(date(2025, 6, 1));
        let b = FinancialYear::from_date(date(2026, 2, 28));
        assert_eq!(a, b);
    }

    #[test]
    fn label_round_trips_through_parse() {
        let fy = FinancialYear::starting(2025);
        assert_eq!(fy.label().parse::<FinancialYear>().unwrap(), fy);
        assert!("2025-27".parse::<FinancialYear>().is_err());
        assert!("2025".parse::<FinancialYear>().is_err());
    }

    #[test]
    fn century_boundary_label() {
        assert_eq!(FinancialYear::starting(2099).label(), "2099-00");
    }

    #[test]
    fn period_bounds() {
        let fy = FinancialYear::starting(2025);
        assert_eq!(fy.start(), date(2025, 4, 1));
        assert_eq!(fy.end(), date(2026, 3, 31));
        assert!(fy.contains(date(2026, 1, 10)));
        assert!(!fy.contains(date(2026, 4, 1)));
    }
}
