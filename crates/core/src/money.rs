//! Paise-scaled money.
//!
//! Amounts are stored in the smallest currency unit (paise, 1/100 rupee) as a
//! non-negative integer. Parsing from a decimal rupee value rounds **half away
//! from zero** at the 2-decimal boundary, on the 100-scaled representation, so
//! float artifacts like `19.999999999999996` land on exactly 20.00 and the
//! paise part is always in `0..=99`.

use serde::{Deserialize, Serialize};

use crate::error::{BillingError, BillingResult};

/// A non-negative currency amount in paise.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Wrap an amount already expressed in paise.
    pub fn from_paise(paise: u64) -> Self {
        Self(paise)
    }

    /// Parse a decimal rupee value.
    ///
    /// Rejects negative, NaN, and infinite input with
    /// [`BillingError::InvalidAmount`]. Rounds half away from zero at the
    /// 2-decimal boundary.
    pub fn from_rupees(rupees: f64) -> BillingResult<Self> {
        if rupees.is_nan() {
            return Err(BillingError::invalid_amount("amount is NaN"));
        }
        if rupees.is_infinite() {
            return Err(BillingError::invalid_amount("amount is infinite"));
        }
        if rupees < 0.0 {
            return Err(BillingError::invalid_amount(format!(
                "amount is negative: {rupees}"
            )));
        }
        let scaled = (rupees * 100.0).round();
        if scaled > u64::MAX as f64 {
            return Err(BillingError::invalid_amount(format!(
                "amount out of range: {rupees}"
            )));
        }
        Ok(Self(scaled as u64))
    }

    /// Total amount in paise.
    pub fn total_paise(&self) -> u64 {
        self.0
    }

    /// Whole-rupee part.
    pub fn rupees(&self) -> u64 {
        self.0 / 100
    }

    /// Fractional paise part, always `0..=99`.
    pub fn paise_part(&self) -> u8 {
        (self.0 % 100) as u8
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Lossy decimal rupee view, for display formatting only.
    pub fn to_rupees_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Checked addition; fails on overflow.
    pub fn checked_add(self, other: Money) -> BillingResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| BillingError::invariant("money addition overflow"))
    }

    /// Apply a percentage expressed in basis points (1% = 100 bp), rounding
    /// half away from zero. Used for GST amounts.
    pub fn percent_of(self, basis_points: u32) -> BillingResult<Money> {
        let numerator = (self.0 as u128)
            .checked_mul(basis_points as u128)
            .ok_or_else(|| BillingError::invariant("percentage overflow"))?;
        // 10_000 bp = 100%; +5_000 applies half-away-from-zero rounding.
        let paise = (numerator + 5_000) / 10_000;
        u64::try_from(paise)
            .map(Money)
            .map_err(|_| BillingError::invariant("percentage overflow"))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.rupees(), self.paise_part())
    }
}
