//! Ledger value types: transaction kind and cash amount.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize, Serializer};

use super::error::LedgerError;

/// Direction of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Cash coming into the drawer.
    #[serde(alias = "entrada")]
    Entry,
    /// Cash leaving the drawer.
    #[serde(alias = "saida")]
    Exit,
}

impl TransactionKind {
    /// Canonical storage and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Exit => "exit",
        }
    }

    /// Signed contribution of `amount` to a balance.
    #[must_use]
    pub fn signed(self, amount: Amount) -> Decimal {
        match self {
            Self::Entry => amount.value(),
            Self::Exit => -amount.value(),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    /// Accepts the canonical names plus the legacy `entrada` / `saida` labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entry" | "entrada" => Ok(Self::Entry),
            "exit" | "saida" | "saída" => Ok(Self::Exit),
            _ => Err(LedgerError::InvalidKind(s.to_string())),
        }
    }
}

/// A non-negative cash amount with two fractional digits.
///
/// Stored as integer minor units so sums are exact on every database backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    cents: i64,
}

impl Amount {
    /// Number of fractional digits kept.
    pub const SCALE: u32 = 2;

    /// The zero amount.
    pub const ZERO: Self = Self { cents: 0 };

    /// Largest accepted amount in minor units (100 billion).
    ///
    /// Keeps ledger sums of up to ~900k such rows within a signed 64-bit
    /// column.
    pub const MAX_CENTS: i64 = 10_000_000_000_000;

    /// The largest accepted amount.
    pub const MAX: Self = Self {
        cents: Self::MAX_CENTS,
    };

    /// Parses user input such as `"12.50"`.
    ///
    /// Surrounding whitespace is ignored and scientific notation is accepted.
    /// Extra fractional digits are rounded half away from zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for anything that is not a finite decimal,
    /// `NegativeAmount` for values below zero and `AmountOutOfRange` for
    /// values above [`Amount::MAX`].
    pub fn parse(raw: &str) -> Result<Self, LedgerError> {
        let trimmed = raw.trim();
        // Digit separators are not amount syntax.
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        {
            return Err(LedgerError::InvalidAmount(raw.to_string()));
        }
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| LedgerError::InvalidAmount(raw.to_string()))?;
        Self::from_decimal(value)
    }

    /// Builds an amount from a decimal value.
    ///
    /// # Errors
    ///
    /// Same as [`Amount::parse`] minus the syntax error.
    pub fn from_decimal(value: Decimal) -> Result<Self, LedgerError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(LedgerError::NegativeAmount);
        }

        let rounded = value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        let cents = rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|c| c.to_i64())
            .filter(|c| *c <= Self::MAX_CENTS)
            .ok_or(LedgerError::AmountOutOfRange)?;

        Ok(Self { cents })
    }

    /// Builds an amount from stored minor units.
    ///
    /// Negative inputs are clamped to zero.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self {
            cents: if cents < 0 { 0 } else { cents },
        }
    }

    /// Minor units for storage.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.cents
    }

    /// Decimal value with a fixed scale of two.
    #[must_use]
    pub fn value(self) -> Decimal {
        Decimal::new(self.cents, Self::SCALE)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
