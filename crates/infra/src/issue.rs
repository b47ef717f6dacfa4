//! Bill issue flow: assign a number, insert, retry on a lost race.

use tradebill_bills::{Bill, BillDraft};
use tradebill_core::{BillingError, BillingResult};
use tradebill_numbering::{BillNumberSequencer, SequencerPolicy};

use crate::register::BillRegister;

/// Assign the next bill number and insert the bill, retrying number
/// assignment up to `max_attempts` times when the register reports a
/// duplicate (two callers read the same maximum concurrently).
///
/// Any other error — validation, lookup failure — propagates immediately.
/// When attempts are exhausted the final
/// [`BillingError::DuplicateNumber`] surfaces to the caller.
pub fn issue_bill_with_retry<R: BillRegister>(
    register: &R,
    policy: SequencerPolicy,
    draft: &BillDraft,
    max_attempts: u32,
) -> BillingResult<Bill> {
    if max_attempts == 0 {
        return Err(BillingError::validation("max_attempts must be at least 1"));
    }
    let sequencer = BillNumberSequencer::with_policy(register, policy);
    let mut attempt = 0;
    loop {
        attempt += 1;
        let number = sequencer.next_bill_number(draft.category, draft.bill_date)?;
        let bill = Bill::issue(draft.clone(), number)?;
        match register.insert(bill.clone()) {
            Ok(()) => return Ok(bill),
            Err(BillingError::DuplicateNumber(taken)) if attempt < max_attempts => {
                tracing::warn!(attempt, number = %taken, "bill number taken, reassigning");
            }
            Err(err) => return Err(err),
        }
    }
}
