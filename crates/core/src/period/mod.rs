//! Calendar periods used by the ledger.
//!
//! - `window` - inclusive date ranges for the day, ISO week and month views
//! - `month` - validated month/year pairs for monthly reports

pub mod month;
pub mod window;

pub use month::ReportPeriod;
pub use window::{DATE_FORMAT, DateWindow, LedgerWindows, parse_date};
