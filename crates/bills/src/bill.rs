//! Bill records.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use tradebill_core::{BillCategory, BillingError, BillingResult, FinancialYear, Money};
use tradebill_numbering::BillNumber;
use tradebill_words::amount_to_words;

/// One line on a bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
    pub particular: String,
    pub qty_bags: Option<u32>,
    pub weight_kg: Option<f64>,
    /// Rate per unit, when priced by rate rather than entered directly.
    pub rate: Option<Money>,
    pub amount: Money,
}

/// GST percentages in basis points (1% = 100 bp).
///
/// Held integrally so the breakup arithmetic stays exact. Typical intra-state
/// split is CGST + SGST; inter-state uses IGST alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstRates {
    pub cgst_bp: u32,
    pub sgst_bp: u32,
    pub igst_bp: u32,
}

impl GstRates {
    /// CGST + SGST split, e.g. `GstRates::intra_state(250)` for 2.5% + 2.5%.
    pub fn intra_state(half_bp: u32) -> Self {
        Self {
            cgst_bp: half_bp,
            sgst_bp: half_bp,
            igst_bp: 0,
        }
    }

    pub fn inter_state(igst_bp: u32) -> Self {
        Self {
            cgst_bp: 0,
            sgst_bp: 0,
            igst_bp,
        }
    }
}

/// GST amounts derived from a taxable total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstBreakup {
    pub rates: GstRates,
    pub cgst: Money,
    pub sgst: Money,
    pub igst: Money,
    pub total: Money,
}

impl GstBreakup {
    pub fn compute(taxable: Money, rates: GstRates) -> BillingResult<Self> {
        let cgst = taxable.percent_of(rates.cgst_bp)?;
        let sgst = taxable.percent_of(rates.sgst_bp)?;
        let igst = taxable.percent_of(rates.igst_bp)?;
        let total = cgst.checked_add(sgst)?.checked_add(igst)?;
        Ok(Self {
            rates,
            cgst,
            sgst,
            igst,
            total,
        })
    }
}

/// Bank details printed on credit bills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    pub bank_name: String,
    pub ifsc: String,
    pub account: String,
}

/// Input to bill issuance, as captured from the entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillDraft {
    pub category: BillCategory,
    pub party: crate::Party,
    pub bill_date: NaiveDate,
    pub items: Vec<BillItem>,
    pub gst: Option<GstRates>,
    pub vehicle_number: Option<String>,
    /// Prior outstanding balance carried onto the bill face.
    pub balance: Option<Money>,
    pub bank: Option<BankDetails>,
    pub notes: Option<String>,
}

/// An issued bill.
///
/// Validated and totalled once at issuance; the number, totals, and words
/// rendering never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    number: BillNumber,
    category: BillCategory,
    party: crate::Party,
    bill_date: NaiveDate,
    financial_year: FinancialYear,
    /// Calendar month of the bill date (1–12), used by monthly reports.
    month_number: u32,
    items: Vec<BillItem>,
    taxable: Money,
    gst: Option<GstBreakup>,
    balance: Money,
    grand_total: Money,
    total_amount_words: String,
    vehicle_number: Option<String>,
    bank: Option<BankDetails>,
    notes: Option<String>,
}

impl Bill {
    /// Validate a draft and issue it under the given number.
    pub fn issue(draft: BillDraft, number: BillNumber) -> BillingResult<Self> {
        if number.category != draft.category {
            return Err(BillingError::invariant(
                "bill number category does not match the bill",
            ));
        }
        if draft.items.is_empty() {
            return Err(BillingError::validation("cannot issue a bill without items"));
        }
        if !draft.category.carries_gst() {
            if draft.gst.is_some() {
                return Err(BillingError::invariant("kacchi bill cannot carry GST"));
            }
            if draft.bank.is_some() {
                return Err(BillingError::invariant(
                    "kacchi bill does not print bank details",
                ));
            }
        }

        let mut taxable = Money::ZERO;
        for item in &draft.items {
            if item.particular.trim().is_empty() {
                return Err(BillingError::validation(
                    "bill item particular must not be empty",
                ));
            }
            if item.amount.is_zero() {
                return Err(BillingError::validation(
                    "bill item amount must be positive",
                ));
            }
            taxable = taxable.checked_add(item.amount)?;
        }

        let gst = match draft.gst {
            Some(rates) => Some(GstBreakup::compute(taxable, rates)?),
            None => None,
        };

        let balance = draft.balance.unwrap_or(Money::ZERO);
        let gst_total = gst.map(|g| g.total).unwrap_or(Money::ZERO);
        let grand_total = taxable.checked_add(gst_total)?.checked_add(balance)?;

        Ok(Self {
            number,
            category: draft.category,
            financial_year: FinancialYear::from_date(draft.bill_date),
            month_number: draft.bill_date.month(),
            party: draft.party,
            bill_date: draft.bill_date,
            items: draft.items,
            taxable,
            gst,
            balance,
            total_amount_words: amount_to_words(grand_total),
            grand_total,
            vehicle_number: draft.vehicle_number,
            bank: draft.bank,
            notes: draft.notes,
        })
    }

    pub fn number(&self) -> BillNumber {
        self.number
    }

    pub fn category(&self) -> BillCategory {
        self.category
    }

    pub fn party(&self) -> &crate::Party {
        &self.party
    }

    pub fn bill_date(&self) -> NaiveDate {
        self.bill_date
    }

    pub fn financial_year(&self) -> FinancialYear {
        self.financial_year
    }

    pub fn month_number(&self) -> u32 {
        self.month_number
    }

    pub fn items(&self) -> &[BillItem] {
        &self.items
    }

    /// Sum of item amounts before GST.
    pub fn taxable(&self) -> Money {
        self.taxable
    }

    pub fn gst(&self) -> Option<&GstBreakup> {
        self.gst.as_ref()
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Taxable + GST + carried balance; the amount spelled on the face.
    pub fn grand_total(&self) -> Money {
        self.grand_total
    }

    pub fn total_amount_words(&self) -> &str {
        &self.total_amount_words
    }

    pub fn vehicle_number(&self) -> Option<&str> {
        self.vehicle_number.as_deref()
    }

    pub fn bank(&self) -> Option<&BankDetails> {
        self.bank.as_ref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Party;

    fn test_party() -> Party {
        Party::new("PYT001", "Shree Traders", None).unwrap()
    }

    fn test_item(paise: u64) -> BillItem {
        BillItem {
            particular: "PADDY".to_string(),
            qty_bags: Some(10),
            weight_kg: Some(500.0),
            rate: None,
            amount: Money::from_paise(paise),
        }
    }

    fn cash_number(seq: u64) -> BillNumber {
        BillNumber {
            category: BillCategory::Cash,
            financial_year: None,
            sequence: seq,
        }
    }

    fn credit_number(start_year: i32, seq: u64) -> BillNumber {
        BillNumber {
            category: BillCategory::Credit,
            financial_year: Some(FinancialYear::starting(start_year)),
            sequence: seq,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cash_draft() -> BillDraft {
        BillDraft {
            category: BillCategory::Cash,
            party: test_party(),
            bill_date: date(2025, 5, 15),
            items: vec![test_item(150_000)],
            gst: None,
            vehicle_number: Some("MH10 AB 1234".to_string()),
            balance: None,
            bank: None,
            notes: None,
        }
    }

    #[test]
    fn issue_derives_period_and_words() {
        let bill = Bill::issue(cash_draft(), cash_number(7)).unwrap();
        assert_eq!(bill.number().formatted(), "K007");
        assert_eq!(bill.financial_year().label(), "2025-26");
        assert_eq!(bill.month_number(), 5);
        assert_eq!(bill.grand_total(), Money::from_paise(150_000));
        assert_eq!(
            bill.total_amount_words(),
            "One Thousand Five Hundred Rupees Only"
        );
    }

    #[test]
    fn cannot_issue_without_items() {
        let mut draft = cash_draft();
        draft.items.clear();
        let err = Bill::issue(draft, cash_number(1)).unwrap_err();
        assert!(matches!(err, BillingError::Validation(_)));
    }

    #[test]
    fn cannot_issue_with_zero_amount_item() {
        let mut draft = cash_draft();
        draft.items[0].amount = Money::ZERO;
        assert!(Bill::issue(draft, cash_number(1)).is_err());
    }

    #[test]
    fn kacchi_bill_rejects_gst() {
        let mut draft = cash_draft();
        draft.gst = Some(GstRates::intra_state(250));
        let err = Bill::issue(draft, cash_number(1)).unwrap_err();
        assert!(matches!(err, BillingError::InvariantViolation(_)));
    }

    #[test]
    fn number_category_must_match() {
        let err = Bill::issue(cash_draft(), credit_number(2025, 1)).unwrap_err();
        assert!(matches!(err, BillingError::InvariantViolation(_)));
    }

    #[test]
    fn pakki_bill_totals_include_gst() {
        let draft = BillDraft {
            category: BillCategory::Credit,
            party: test_party(),
            bill_date: date(2025, 5, 15),
            // 1000.00 taxable
            items: vec![test_item(100_000)],
            // 2.5% + 2.5%
            gst: Some(GstRates::intra_state(250)),
            vehicle_number: None,
            balance: Some(Money::from_paise(10_000)),
            bank: Some(BankDetails {
                bank_name: "Bank of Maharashtra".to_string(),
                ifsc: "MAHB0000001".to_string(),
                account: "60000000001".to_string(),
            }),
            notes: None,
        };
        let bill = Bill::issue(draft, credit_number(2025, 3)).unwrap();
        let gst = bill.gst().unwrap();
        assert_eq!(gst.cgst, Money::from_paise(2_500));
        assert_eq!(gst.sgst, Money::from_paise(2_500));
        assert_eq!(gst.igst, Money::ZERO);
        assert_eq!(gst.total, Money::from_paise(5_000));
        // 1000.00 + 50.00 GST + 100.00 balance
        assert_eq!(bill.grand_total(), Money::from_paise(115_000));
        assert_eq!(bill.number().formatted(), "P/2025-26/003");
        assert_eq!(
            bill.total_amount_words(),
            "One Thousand One Hundred Fifty Rupees Only"
        );
    }
}
