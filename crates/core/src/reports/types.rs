//! Report data types.

use serde::Serialize;

use crate::ledger::{CashTransaction, Totals};
use crate::period::ReportPeriod;

/// Totals and listing for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyReport {
    /// Month the report covers.
    pub period: ReportPeriod,
    /// Totals over every transaction in the month, open or closed.
    pub totals: Totals,
    /// Every transaction dated in the month.
    pub transactions: Vec<CashTransaction>,
    /// True for the empty report shown before a month is chosen.
    pub is_placeholder: bool,
}

impl MonthlyReport {
    /// Assembles a report from computed totals and the month's listing.
    #[must_use]
    pub fn new(period: ReportPeriod, totals: Totals, transactions: Vec<CashTransaction>) -> Self {
        Self {
            period,
            totals,
            transactions,
            is_placeholder: false,
        }
    }

    /// Zero-valued report used when no month has been requested yet.
    ///
    /// This is not a real report for `period`; nothing is queried.
    #[must_use]
    pub fn placeholder(period: ReportPeriod) -> Self {
        Self {
            period,
            totals: Totals::default(),
            transactions: Vec::new(),
            is_placeholder: true,
        }
    }

    /// Builds a report entirely in memory from arbitrary records.
    ///
    /// Records outside `period` are ignored; the closed flag is not.
    #[must_use]
    pub fn tally(period: ReportPeriod, records: &[CashTransaction]) -> Self {
        let window = period.window();
        let transactions: Vec<CashTransaction> = records
            .iter()
            .filter(|tx| window.contains(tx.date))
            .cloned()
            .collect();
        let totals = Totals::tally(&transactions);
        Self::new(period, totals, transactions)
    }
}
