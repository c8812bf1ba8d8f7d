//! Balance totals and the live ledger summary.
//!
//! The database computes these figures with a single grouped-sum query; the
//! `tally` functions here compute the same figures from records in memory and
//! serve as the reference model for that query.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::transaction::CashTransaction;
use super::types::{Amount, TransactionKind};
use crate::period::{DateWindow, LedgerWindows};

/// Entry, exit and balance figures over some set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Sum of entry amounts.
    pub total_entry: Decimal,
    /// Sum of exit amounts.
    pub total_exit: Decimal,
    /// `total_entry - total_exit`.
    pub balance: Decimal,
}

impl Totals {
    /// Totals from entry and exit sums.
    #[must_use]
    pub fn new(total_entry: Decimal, total_exit: Decimal) -> Self {
        Self {
            total_entry,
            total_exit,
            balance: total_entry - total_exit,
        }
    }

    /// Totals from stored minor-unit sums. Missing sums count as zero.
    #[must_use]
    pub fn from_cents(entry_cents: Option<i64>, exit_cents: Option<i64>) -> Self {
        Self::new(
            Decimal::new(entry_cents.unwrap_or(0), Amount::SCALE),
            Decimal::new(exit_cents.unwrap_or(0), Amount::SCALE),
        )
    }

    /// Adds one movement.
    pub fn record(&mut self, kind: TransactionKind, amount: Amount) {
        match kind {
            TransactionKind::Entry => self.total_entry += amount.value(),
            TransactionKind::Exit => self.total_exit += amount.value(),
        }
        self.balance = self.total_entry - self.total_exit;
    }

    /// Totals over every transaction yielded by `transactions`.
    #[must_use]
    pub fn tally<'a>(transactions: impl IntoIterator<Item = &'a CashTransaction>) -> Self {
        transactions.into_iter().fold(Self::default(), |mut totals, tx| {
            totals.record(tx.kind, tx.amount);
            totals
        })
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.total_entry.is_zero() && self.total_exit.is_zero()
    }
}

/// Live view of the cash drawer.
///
/// Every total only counts open transactions. The list of today's
/// transactions includes closed ones so the operator still sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    /// Day the summary was computed for.
    pub as_of: NaiveDate,
    /// Windows the totals were computed over.
    pub windows: LedgerWindows,
    /// All open transactions.
    pub overall: Totals,
    /// Open transactions dated today.
    pub today: Totals,
    /// Open transactions in the current ISO week.
    pub week: Totals,
    /// Open transactions in the current calendar month.
    pub month: Totals,
    /// Every transaction dated today, open or closed.
    pub today_transactions: Vec<CashTransaction>,
}

/// The four open-balance totals of a summary, without the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowTotals {
    /// All open transactions.
    pub overall: Totals,
    /// Open transactions dated today.
    pub today: Totals,
    /// Open transactions in the current ISO week.
    pub week: Totals,
    /// Open transactions in the current calendar month.
    pub month: Totals,
}

impl WindowTotals {
    /// Reference computation over in-memory records.
    #[must_use]
    pub fn tally(transactions: &[CashTransaction], windows: &LedgerWindows) -> Self {
        let open = || transactions.iter().filter(|tx| !tx.closed);
        let within = |window: DateWindow| {
            Totals::tally(open().filter(move |tx| window.contains(tx.date)))
        };

        Self {
            overall: Totals::tally(open()),
            today: within(windows.today),
            week: within(windows.week),
            month: within(windows.month),
        }
    }
}

impl LedgerSummary {
    /// Assembles a summary from computed totals and today's listing.
    #[must_use]
    pub fn new(as_of: NaiveDate, totals: WindowTotals, today_transactions: Vec<CashTransaction>) -> Self {
        Self {
            as_of,
            windows: LedgerWindows::for_date(as_of),
            overall: totals.overall,
            today: totals.today,
            week: totals.week,
            month: totals.month,
            today_transactions,
        }
    }

    /// Builds a summary entirely in memory.
    #[must_use]
    pub fn tally(as_of: NaiveDate, transactions: &[CashTransaction]) -> Self {
        let windows = LedgerWindows::for_date(as_of);
        let totals = WindowTotals::tally(transactions, &windows);
        let today_transactions = transactions
            .iter()
            .filter(|tx| tx.date == as_of)
            .cloned()
            .collect();
        Self::new(as_of, totals, today_transactions)
    }

    /// The four totals without the listing.
    #[must_use]
    pub fn window_totals(&self) -> WindowTotals {
        WindowTotals {
            overall: self.overall,
            today: self.today,
            week: self.week,
            month: self.month,
        }
    }
}
