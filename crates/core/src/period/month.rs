//! Month/year pairs selected for monthly reports.

use chrono::NaiveDate;
use serde::Serialize;

use super::window::DateWindow;
use crate::ledger::LedgerError;

/// A validated calendar month.
///
/// Only [`ReportPeriod::new`] and [`ReportPeriod::from_query`] build one, so
/// the first day of the month always exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    month: u32,
    year: i32,
    #[serde(skip)]
    first_day: NaiveDate,
}

impl ReportPeriod {
    /// Validates a month/year pair.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` outside 1-12 and `InvalidYear` for years the
    /// calendar cannot represent.
    pub fn new(month: u32, year: i32) -> Result<Self, LedgerError> {
        if !(1..=12).contains(&month) {
            return Err(LedgerError::InvalidMonth(month.to_string()));
        }
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| LedgerError::InvalidYear(year.to_string()))?;
        Ok(Self {
            month,
            year,
            first_day,
        })
    }

    /// Month number, 1-12.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// January 2024, the period an empty report shows when nothing else is
    /// configured.
    pub const FALLBACK: Self = Self {
        month: 1,
        year: 2024,
        first_day: match NaiveDate::from_ymd_opt(2024, 1, 1) {
            Some(day) => day,
            None => panic!("2024-01-01 is a calendar date"),
        },
    };

    /// Interprets raw query parameters.
    ///
    /// Returns `Ok(None)` when either value is missing or blank: the caller
    /// shows an empty placeholder report instead of querying.
    ///
    /// # Errors
    ///
    /// Returns a `LedgerError` when a value is present but malformed.
    pub fn from_query(month: Option<&str>, year: Option<&str>) -> Result<Option<Self>, LedgerError> {
        let (Some(month), Some(year)) = (
            month.map(str::trim).filter(|m| !m.is_empty()),
            year.map(str::trim).filter(|y| !y.is_empty()),
        ) else {
            return Ok(None);
        };

        let month_num: u32 = month
            .parse()
            .map_err(|_| LedgerError::InvalidMonth(month.to_string()))?;
        let year_num: i32 = year
            .parse()
            .map_err(|_| LedgerError::InvalidYear(year.to_string()))?;

        Self::new(month_num, year_num).map(Some)
    }

    /// The dates covered by this month.
    #[must_use]
    pub fn window(&self) -> DateWindow {
        DateWindow::month(self.first_day)
    }

    /// Short label such as `03/2024`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }
}
