//! Exact decimal amounts parsed from text.

use std::borrow::Borrow;
use std::ops::Deref;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::DomainError;

/// A monetary amount used by deposits and withdrawals.
///
/// Only built from decimal text or an existing [`Decimal`], never from a
/// binary float, so the value is exactly what the caller wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Returns the wrapped decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    /// Parses plain (`"10.01"`) or scientific (`"1.5e2"`) decimal notation.
    /// Surrounding whitespace is ignored.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(invalid(text, "amount is empty"));
        }
        if let Some(c) = trimmed.chars().find(|c| !is_decimal_char(*c)) {
            return Err(invalid(text, &format!("unexpected character '{c}'")));
        }

        let parsed = if trimmed.contains(['e', 'E']) {
            Decimal::from_scientific(trimmed)
        } else {
            Decimal::from_str_exact(trimmed)
        };

        parsed
            .map(Self)
            .map_err(|err| invalid(text, &err.to_string()))
    }
}

/// Characters of plain or scientific decimal notation. No digit separators.
fn is_decimal_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')
}

fn invalid(text: &str, reason: &str) -> DomainError {
    DomainError::InvalidAmount {
        amount: text.to_string(),
        reason: reason.to_string(),
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Borrow<Decimal> for Amount {
    fn borrow(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for Amount {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
