//! Bill register ports and the in-memory adapter.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use tradebill_bills::Bill;
use tradebill_core::{BillingError, BillingResult};
use tradebill_numbering::{NumberLookup, NumberQuery};

/// Storage port for issued bills.
///
/// Implementations must enforce uniqueness of the formatted bill number and
/// reject a duplicate insert with [`BillingError::DuplicateNumber`] — that is
/// what turns a numbering race into a visible, retryable failure instead of a
/// silent duplicate invoice.
pub trait BillRegister: NumberLookup {
    fn insert(&self, bill: Bill) -> BillingResult<()>;

    fn get(&self, formatted_number: &str) -> BillingResult<Option<Bill>>;
}

/// In-memory register keyed by formatted bill number.
#[derive(Debug, Default)]
pub struct InMemoryBillRegister {
    bills: Mutex<BTreeMap<String, Bill>>,
}

impl InMemoryBillRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of every stored bill, in number order.
    pub fn all_bills(&self) -> Vec<Bill> {
        self.lock().values().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Bill>> {
        self.bills.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NumberLookup for InMemoryBillRegister {
    fn issued_numbers(&self, query: &NumberQuery) -> BillingResult<Vec<String>> {
        let prefix = query.category.prefix();
        let scoped_prefix = query
            .financial_year
            .map(|fy| format!("{prefix}/{}/", fy.label()));
        let numbers = self
            .lock()
            .keys()
            .filter(|number| match &scoped_prefix {
                Some(p) => number.starts_with(p.as_str()),
                None => number.starts_with(prefix),
            })
            .cloned()
            .collect();
        Ok(numbers)
    }
}

impl BillRegister for InMemoryBillRegister {
    fn insert(&self, bill: Bill) -> BillingResult<()> {
        let number = bill.number().formatted();
        let mut bills = self.lock();
        if bills.contains_key(&number) {
            return Err(BillingError::duplicate_number(number));
        }
        bills.insert(number, bill);
        Ok(())
    }

    fn get(&self, formatted_number: &str) -> BillingResult<Option<Bill>> {
        Ok(self.lock().get(formatted_number).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tradebill_bills::{BillDraft, BillItem, Party};
    use tradebill_core::{BillCategory, Money};
    use tradebill_numbering::BillNumber;

    fn sample_bill(seq: u64) -> Bill {
        let draft = BillDraft {
            category: BillCategory::Cash,
            party: Party::new("PYT001", "Shree Traders", None).unwrap(),
            bill_date: NaiveDate::from_ymd_opt(2025, 5, 15).unwrap(),
            items: vec![BillItem {
                particular: "MP".to_string(),
                qty_bags: None,
                weight_kg: None,
                rate: None,
                amount: Money::from_paise(50_000),
            }],
            gst: None,
            vehicle_number: None,
            balance: None,
            bank: None,
            notes: None,
        };
        Bill::issue(
            draft,
            BillNumber {
                category: BillCategory::Cash,
                financial_year: None,
                sequence: seq,
            },
        )
        .unwrap()
    }

    #[test]
    fn insert_then_get() {
        let register = InMemoryBillRegister::new();
        register.insert(sample_bill(1)).unwrap();
        let stored = register.get("K001").unwrap().unwrap();
        assert_eq!(stored.number().formatted(), "K001");
        assert_eq!(register.len(), 1);
    }

    #[test]
    fn duplicate_number_is_rejected() {
        let register = InMemoryBillRegister::new();
        register.insert(sample_bill(1)).unwrap();
        let err = register.insert(sample_bill(1)).unwrap_err();
        assert!(matches!(err, BillingError::DuplicateNumber(_)));
        assert_eq!(register.len(), 1);
    }

    #[test]
    fn issued_numbers_filters_by_category_prefix() {
        let register = InMemoryBillRegister::new();
        register.insert(sample_bill(1)).unwrap();
        register.insert(sample_bill(2)).unwrap();

        let cash = register
            .issued_numbers(&NumberQuery::all_for(BillCategory::Cash))
            .unwrap();
        assert_eq!(cash, vec!["K001".to_string(), "K002".to_string()]);

        let credit = register
            .issued_numbers(&NumberQuery::all_for(BillCategory::Credit))
            .unwrap();
        assert!(credit.is_empty());
    }
}
