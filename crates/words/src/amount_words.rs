//! Indian-English words rendering of currency amounts.
//!
//! Grouping follows the Indian system: the least-significant group is three
//! digits, every group above it is two (Thousand, Lakh, Crore), and the crore
//! multiplier is spelled recursively so arbitrarily large amounts render
//! ("One Crore Crore" territory is unreachable for real bills but still
//! well-formed).
//!
//! Policy, fixed here once for the whole workspace:
//! - a zero amount renders as exactly `"Zero"` (no "Rupees", no "Only");
//! - the plural "Rupees"/"Paise" is used even for one (`"One Rupees Only"`);
//! - every non-zero rendering ends with `" Only"`;
//! - rounding to whole paise happens in [`Money::from_rupees`], before the
//!   rupee/paise split, so the paise clause is always below one hundred.

use tradebill_core::{BillingResult, Money};

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell a value below one thousand. Zero renders as the empty string.
fn spell_below_thousand(n: u64) -> String {
    debug_assert!(n < 1_000);
    if n == 0 {
        return String::new();
    }
    if n < 10 {
        return ONES[n as usize].to_string();
    }
    if n < 20 {
        return TEENS[(n - 10) as usize].to_string();
    }
    if n < 100 {
        let mut words = TENS[(n / 10) as usize].to_string();
        if n % 10 != 0 {
            words.push(' ');
            words.push_str(ONES[(n % 10) as usize]);
        }
        return words;
    }
    let mut words = format!("{} Hundred", ONES[(n / 100) as usize]);
    if n % 100 != 0 {
        words.push(' ');
        words.push_str(&spell_below_thousand(n % 100));
    }
    words
}

/// Spell a positive integer with Indian grouping.
fn spell_integer(n: u64) -> String {
    if n >= 10_000_000 {
        let mut words = spell_integer(n / 10_000_000);
        words.push_str(" Crore");
        if n % 10_000_000 != 0 {
            words.push(' ');
            words.push_str(&spell_integer(n % 10_000_000));
        }
        words
    } else if n >= 100_000 {
        let mut words = spell_below_thousand(n / 100_000);
        words.push_str(" Lakh");
        if n % 100_000 != 0 {
            words.push(' ');
            words.push_str(&spell_integer(n % 100_000));
        }
        words
    } else if n >= 1_000 {
        let mut words = spell_below_thousand(n / 1_000);
        words.push_str(" Thousand");
        if n % 1_000 != 0 {
            words.push(' ');
            words.push_str(&spell_below_thousand(n % 1_000));
        }
        words
    } else {
        spell_below_thousand(n)
    }
}

/// Render an amount as words, e.g.
/// `"Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees and
/// Eighty Nine Paise Only"`.
pub fn amount_to_words(amount: Money) -> String {
    let rupees = amount.rupees();
    let paise = amount.paise_part() as u64;

    if rupees == 0 && paise == 0 {
        return "Zero".to_string();
    }

    let mut words = String::new();
    if rupees > 0 {
        words.push_str(&spell_integer(rupees));
        words.push_str(" Rupees");
    }
    if paise > 0 {
        if rupees > 0 {
            words.push_str(" and ");
        }
        words.push_str(&spell_below_thousand(paise));
        words.push_str(" Paise");
    }
    words.push_str(" Only");
    words
}

/// Validate and round a decimal rupee value, then render it as words.
///
/// Fails with [`tradebill_core::BillingError::InvalidAmount`] when the value
/// is negative, NaN, or infinite.
pub fn rupees_to_words(rupees: f64) -> BillingResult<String> {
    Ok(amount_to_words(Money::from_rupees(rupees)?))
}
