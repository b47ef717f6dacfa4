//! Trading parties.

use serde::{Deserialize, Serialize};

use tradebill_core::{BillingError, BillingResult};

/// A party a bill is raised against.
///
/// `code` follows the short `PYT`-prefixed convention used on printed bills
/// (`PYT01`, `PYT02`, ...). The GSTIN is optional: cash parties often have
/// none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    code: String,
    name: String,
    gstin: Option<String>,
}

impl Party {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        gstin: Option<String>,
    ) -> BillingResult<Self> {
        let code = code.into();
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BillingError::validation("party name must not be empty"));
        }
        if code.trim().is_empty() {
            return Err(BillingError::validation("party code must not be empty"));
        }
        if let Some(gstin) = &gstin {
            if gstin.trim().is_empty() {
                return Err(BillingError::validation("party GSTIN must not be blank"));
            }
        }
        Ok(Self { code, name, gstin })
    }

    /// Build the display code for a numeric party id: 1 -> `PYT001`.
    pub fn code_for(id: u64) -> String {
        format!("PYT{id:03}")
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gstin(&self) -> Option<&str> {
        self.gstin.as_deref()
    }
}
