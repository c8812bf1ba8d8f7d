//! Ledger error types for validation errors.
//!
//! Every variant describes malformed client input. Store failures are not
//! represented here; repositories surface them unchanged.

use thiserror::Error;

/// Errors that can occur while validating ledger input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // ========== Amount Errors ==========
    /// Amount is not a finite decimal number.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Amount cannot be negative.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// Amount does not fit in the ledger's storage range.
    #[error("Amount is too large")]
    AmountOutOfRange,

    // ========== Transaction Errors ==========
    /// Transaction type is neither entry nor exit.
    #[error("Invalid transaction type: {0:?}")]
    InvalidKind(String),

    // ========== Period Errors ==========
    /// Date is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// Month is not a number between 1 and 12.
    #[error("Invalid month: {0:?}")]
    InvalidMonth(String),

    /// Year is not a valid calendar year.
    #[error("Invalid year: {0:?}")]
    InvalidYear(String),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::AmountOutOfRange => "AMOUNT_OUT_OF_RANGE",
            Self::InvalidKind(_) => "INVALID_TRANSACTION_TYPE",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::InvalidMonth(_) => "INVALID_MONTH",
            Self::InvalidYear(_) => "INVALID_YEAR",
        }
    }

    /// Returns the HTTP status code for this error.
    ///
    /// All ledger errors are client errors.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount(_)
            | Self::NegativeAmount
            | Self::AmountOutOfRange
            | Self::InvalidKind(_)
            | Self::InvalidDate(_)
            | Self::InvalidMonth(_)
            | Self::InvalidYear(_) => 400,
        }
    }
}
