//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Store errors are returned as `DbErr`, untouched.

pub mod cashbook;
pub mod ledger;

pub use cashbook::CashbookRepository;
pub use ledger::LedgerRepository;
