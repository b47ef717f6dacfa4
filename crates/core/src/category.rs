//! Bill categories.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::BillingError;

/// Bill category: cash-style memo or GST credit memo.
///
/// Source-domain names are "kacchi" (cash) and "pakki" (credit); those spellings
/// are accepted on parse and used for serde to stay compatible with stored rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillCategory {
    #[serde(rename = "kacchi")]
    Cash,
    #[serde(rename = "pakki")]
    Credit,
}

impl BillCategory {
    /// Prefix letter used in bill numbers.
    pub fn prefix(&self) -> char {
        match self {
            BillCategory::Cash => 'K',
            BillCategory::Credit => 'P',
        }
    }

    /// Whether GST fields apply to bills of this category.
    pub fn carries_gst(&self) -> bool {
        matches!(self, BillCategory::Credit)
    }
}

impl core::fmt::Display for BillCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BillCategory::Cash => write!(f, "kacchi"),
            BillCategory::Credit => write!(f, "pakki"),
        }
    }
}

impl FromStr for BillCategory {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kacchi" | "cash" => Ok(BillCategory::Cash),
            "pakki" | "credit" => Ok(BillCategory::Credit),
            other => Err(BillingError::validation(format!(
                "unknown bill category: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_letters() {
        assert_eq!(BillCategory::Cash.prefix(), 'K');
        assert_eq!(BillCategory::Credit.prefix(), 'P');
    }

    #[test]
    fn parses_source_domain_names() {
        assert_eq!("kacchi".parse::<BillCategory>().unwrap(), BillCategory::Cash);
        assert_eq!("pakki".parse::<BillCategory>().unwrap(), BillCategory::Credit);
        assert!("gst".parse::<BillCategory>().is_err());
    }

    #[test]
    fn only_credit_carries_gst() {
        assert!(!BillCategory::Cash.carries_gst());
        assert!(BillCategory::Credit.carries_gst());
    }
}
