//! Summaries over issued bills.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tradebill_bills::Bill;
use tradebill_core::{BillCategory, BillingResult, FinancialYear, Money};

/// Category scope of a report: one category or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    Cash,
    Credit,
    Both,
}

impl CategoryFilter {
    pub fn matches(&self, category: BillCategory) -> bool {
        match self {
            CategoryFilter::Cash => category == BillCategory::Cash,
            CategoryFilter::Credit => category == BillCategory::Credit,
            CategoryFilter::Both => true,
        }
    }
}

/// Reporting period: a financial year, optionally narrowed to one calendar
/// month within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub financial_year: FinancialYear,
    pub month: Option<u32>,
}

impl ReportPeriod {
    pub fn yearly(financial_year: FinancialYear) -> Self {
        Self {
            financial_year,
            month: None,
        }
    }

    pub fn monthly(financial_year: FinancialYear, month: u32) -> Self {
        Self {
            financial_year,
            month: Some(month),
        }
    }

    pub fn matches(&self, bill: &Bill) -> bool {
        if bill.financial_year() != self.financial_year {
            return false;
        }
        match self.month {
            None => true,
            Some(month) => bill.month_number() == month,
        }
    }

    /// `"April 2025-26"` or `"FY 2025-26"` style heading.
    pub fn heading(&self) -> String {
        match self.month {
            Some(month) => format!("{} {}", month_name(month), self.financial_year.label()),
            None => format!("FY {}", self.financial_year.label()),
        }
    }
}

/// English month name for a calendar month number; `"Unknown"` out of range.
pub fn month_name(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    MONTHS
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("Unknown")
}

/// Cover-page totals for a monthly or yearly bill book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillBookSummary {
    pub total_bills: usize,
    pub total_sales: Money,
    pub total_taxable: Money,
    pub total_gst: Money,
}

impl BillBookSummary {
    pub fn from_bills<'a, I>(bills: I) -> BillingResult<Self>
    where
        I: IntoIterator<Item = &'a Bill>,
    {
        let mut total_bills = 0;
        let mut total_sales = Money::ZERO;
        let mut total_taxable = Money::ZERO;
        let mut total_gst = Money::ZERO;
        for bill in bills {
            total_bills += 1;
            total_sales = total_sales.checked_add(bill.grand_total())?;
            total_taxable = total_taxable.checked_add(bill.taxable())?;
            if let Some(gst) = bill.gst() {
                total_gst = total_gst.checked_add(gst.total)?;
            }
        }
        Ok(Self {
            total_bills,
            total_sales,
            total_taxable,
            total_gst,
        })
    }
}

/// One row of the CA report's party-wise table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySummary {
    pub party_code: String,
    pub party_name: String,
    pub bills: usize,
    pub taxable: Money,
    pub gst: Money,
    pub total: Money,
}

impl PartySummary {
    /// Group bills by party, summing taxable/GST/total per party. Rows are
    /// sorted by total descending (largest parties first), ties broken by
    /// party code for stable output.
    pub fn from_bills<'a, I>(bills: I) -> BillingResult<Vec<Self>>
    where
        I: IntoIterator<Item = &'a Bill>,
    {
        let mut by_party: BTreeMap<String, PartySummary> = BTreeMap::new();
        for bill in bills {
            let entry = by_party
                .entry(bill.party().code().to_string())
                .or_insert_with(|| PartySummary {
                    party_code: bill.party().code().to_string(),
                    party_name: bill.party().name().to_string(),
                    bills: 0,
                    taxable: Money::ZERO,
                    gst: Money::ZERO,
                    total: Money::ZERO,
                });
            entry.bills += 1;
            entry.taxable = entry.taxable.checked_add(bill.taxable())?;
            if let Some(gst) = bill.gst() {
                entry.gst = entry.gst.checked_add(gst.total)?;
            }
            entry.total = entry.total.checked_add(bill.grand_total())?;
        }
        let mut rows: Vec<PartySummary> = by_party.into_values().collect();
        rows.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.party_code.cmp(&b.party_code))
        });
        Ok(rows)
    }
}

/// CGST/SGST/IGST totals across a set of bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstBreakdownTotals {
    pub cgst: Money,
    pub sgst: Money,
    pub igst: Money,
}

impl GstBreakdownTotals {
    pub fn from_bills<'a, I>(bills: I) -> BillingResult<Self>
    where
        I: IntoIterator<Item = &'a Bill>,
    {
        let mut cgst = Money::ZERO;
        let mut sgst = Money::ZERO;
        let mut igst = Money::ZERO;
        for bill in bills {
            if let Some(gst) = bill.gst() {
                cgst = cgst.checked_add(gst.cgst)?;
                sgst = sgst.checked_add(gst.sgst)?;
                igst = igst.checked_add(gst.igst)?;
            }
        }
        Ok(Self { cgst, sgst, igst })
    }
}
