//! Account commands.

use common::{AccountNumber, CustomerNumber};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{DomainError, Result};

use super::Account;

/// Request to open a new account.
///
/// Mirrors the account wire format, but every field is optional or raw so
/// that a missing or malformed account number reaches the domain as
/// [`DomainError::InvalidInput`] instead of a deserialization failure. Any
/// `accountStatus` sent by the client is ignored: new accounts start open.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAccount {
    pub account_number: Option<i64>,
    #[serde(default)]
    pub customer_number: i64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

impl OpenAccount {
    /// Creates a command with every field set.
    pub fn new(
        account_number: AccountNumber,
        customer_number: CustomerNumber,
        customer_name: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Self {
            account_number: Some(account_number.into()),
            customer_number: customer_number.get(),
            customer_name: customer_name.into(),
            balance,
        }
    }

    /// Validates the identity and builds the open account.
    pub fn into_account(self) -> Result<Account> {
        let raw = self
            .account_number
            .ok_or_else(|| DomainError::InvalidInput("No account number specified".to_string()))?;
        let account_number = AccountNumber::try_from(raw)
            .map_err(|err| DomainError::InvalidInput(err.to_string()))?;

        Ok(Account::new(
            account_number,
            CustomerNumber::new(self.customer_number),
            self.customer_name,
            self.balance,
        ))
    }
}
