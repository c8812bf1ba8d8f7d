//! Cash-drawer ledger logic.
//!
//! This module implements the core ledger functionality:
//! - Transaction kinds and validated amounts
//! - Transaction records and the inputs that create or change them
//! - Balance totals and the live summary
//! - Error types for ledger validation

pub mod balance;
pub mod error;
pub mod transaction;
pub mod types;

#[cfg(test)]
mod balance_props;

pub use balance::{LedgerSummary, Totals, WindowTotals};
pub use error::LedgerError;
pub use transaction::{CashTransaction, NewTransaction, TransactionChanges};
pub use types::{Amount, TransactionKind};
