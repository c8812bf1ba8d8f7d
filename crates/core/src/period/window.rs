//! Inclusive date windows.
//!
//! Weeks follow ISO-8601: they start on Monday and end on Sunday. Months are
//! calendar months of the given year, never a month number across years.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::Serialize;

use crate::ledger::LedgerError;

/// Date format used on forms and in listings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date as sent by a date input.
///
/// # Errors
///
/// Returns `InvalidDate` if the value is not a real calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDate(raw.to_string()))
}

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    /// First day in the window.
    pub start: NaiveDate,
    /// Last day in the window.
    pub end: NaiveDate,
}

impl DateWindow {
    /// The single day `date`.
    #[must_use]
    pub const fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// The ISO week (Monday..=Sunday) containing `date`.
    #[must_use]
    pub fn iso_week(date: NaiveDate) -> Self {
        let week = date.week(Weekday::Mon);
        Self {
            start: week.first_day(),
            end: week.last_day(),
        }
    }

    /// The calendar month containing `date`.
    #[must_use]
    pub fn month(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    /// Returns true if `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The three live windows shown next to the open balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerWindows {
    /// Today only.
    pub today: DateWindow,
    /// Current ISO week.
    pub week: DateWindow,
    /// Current calendar month.
    pub month: DateWindow,
}

impl LedgerWindows {
    /// Windows anchored on `today`.
    #[must_use]
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            today: DateWindow::day(today),
            week: DateWindow::iso_week(today),
            month: DateWindow::month(today),
        }
    }
}
