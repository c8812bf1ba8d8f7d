//! Monthly cash reports.
//!
//! Unlike the live summary, monthly reports are historical: they include
//! closed transactions.

pub mod types;

#[cfg(test)]
mod tests;

pub use types::MonthlyReport;
