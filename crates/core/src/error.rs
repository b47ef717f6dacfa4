//! Domain error model.

use thiserror::Error;

/// Result type used across the billing domain.
pub type BillingResult<T> = Result<T, BillingError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A monetary amount was negative, NaN, or infinite.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The issued-number lookup collaborator failed.
    ///
    /// This is never collapsed into "no rows": an empty result set is a
    /// legitimate `Ok(vec![])`, a failed query is this error.
    #[error("number lookup failed: {0}")]
    LookupFailed(String),

    /// The persistence collaborator rejected an insert because the bill
    /// number already exists. Callers retry number assignment a bounded
    /// number of times before surfacing this.
    #[error("duplicate bill number: {0}")]
    DuplicateNumber(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl BillingError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn lookup_failed(msg: impl Into<String>) -> Self {
        Self::LookupFailed(msg.into())
    }

    pub fn duplicate_number(msg: impl Into<String>) -> Self {
        Self::DuplicateNumber(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
