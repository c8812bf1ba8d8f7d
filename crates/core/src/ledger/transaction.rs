//! Cash transaction records and the inputs that create or change them.

use chrono::NaiveDate;
use serde::Serialize;

use super::error::LedgerError;
use super::types::{Amount, TransactionKind};
use crate::period::DATE_FORMAT;

/// A recorded cash-drawer transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashTransaction {
    /// Store-assigned identifier.
    pub id: i32,
    /// Entry or exit.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Non-negative amount.
    pub amount: Amount,
    /// How the money moved (cash, card, ...).
    pub payment_method: String,
    /// What was bought or sold.
    pub item_name: String,
    /// Free-form notes.
    pub description: String,
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// True once included in a closed register period.
    pub closed: bool,
}

impl CashTransaction {
    /// Signed contribution to a balance (entries positive, exits negative).
    #[must_use]
    pub fn signed_amount(&self) -> rust_decimal::Decimal {
        self.kind.signed(self.amount)
    }

    /// Date formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Validated input for recording a new transaction.
///
/// There is no date field: new transactions are always dated on the day
/// they are recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    /// Entry or exit.
    pub kind: TransactionKind,
    /// Amount.
    pub amount: Amount,
    /// Payment method.
    pub payment_method: String,
    /// Item name.
    pub item_name: String,
    /// Description.
    pub description: String,
}

impl NewTransaction {
    /// Validates raw form values.
    ///
    /// # Errors
    ///
    /// Returns a `LedgerError` when the type or amount is malformed.
    pub fn parse(
        kind: &str,
        amount: &str,
        payment_method: impl Into<String>,
        item_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, LedgerError> {
        let amount = Amount::parse(amount)?;
        let kind = kind.parse()?;

        Ok(Self {
            kind,
            amount,
            payment_method: payment_method.into(),
            item_name: item_name.into(),
            description: description.into(),
        })
    }
}

/// Validated replacement values for an existing transaction.
///
/// The `closed` flag is absent; only a period close sets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionChanges {
    /// Entry or exit.
    pub kind: TransactionKind,
    /// Amount.
    pub amount: Amount,
    /// New date.
    pub date: NaiveDate,
    /// Payment method.
    pub payment_method: String,
    /// Item name.
    pub item_name: String,
    /// Description.
    pub description: String,
}

impl TransactionChanges {
    /// Validates raw form values.
    ///
    /// # Errors
    ///
    /// Returns a `LedgerError` when the type or amount is malformed.
    pub fn parse(
        kind: &str,
        amount: &str,
        date: NaiveDate,
        payment_method: impl Into<String>,
        item_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, LedgerError> {
        let amount = Amount::parse(amount)?;
        let kind = kind.parse()?;

        Ok(Self {
            kind,
            amount,
            date,
            payment_method: payment_method.into(),
            item_name: item_name.into(),
            description: description.into(),
        })
    }
}
