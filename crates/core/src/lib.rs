//! Cash ledger domain logic for Caixa.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Transactions, amounts, validation and balance totals
//! - `period` - Date windows (day, ISO week, month) and report periods
//! - `reports` - Monthly report assembly

pub mod ledger;
pub mod period;
pub mod reports;

pub use ledger::{
    Amount, CashTransaction, LedgerError, LedgerSummary, NewTransaction, TransactionChanges,
    TransactionKind, Totals, WindowTotals,
};
pub use period::{DATE_FORMAT, DateWindow, LedgerWindows, ReportPeriod, parse_date};
pub use reports::MonthlyReport;
