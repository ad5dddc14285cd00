//! Account entity.

use std::hash::{Hash, Hasher};

use common::{AccountNumber, CustomerNumber};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

use super::{AccountStatus, Amount};

/// A bank account: identity, balance and status.
///
/// Equality and hashing only look at the account number; two values with the
/// same number are the same account whatever their other fields hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    account_number: AccountNumber,
    customer_number: CustomerNumber,
    customer_name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    balance: Decimal,
    account_status: AccountStatus,
}

impl Account {
    /// Creates an open account with the given starting balance.
    pub fn new(
        account_number: AccountNumber,
        customer_number: CustomerNumber,
        customer_name: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Self {
            account_number,
            customer_number,
            customer_name: customer_name.into(),
            balance,
            account_status: AccountStatus::Open,
        }
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn customer_number(&self) -> CustomerNumber {
        self.customer_number
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn status(&self) -> AccountStatus {
        self.account_status
    }

    /// Takes `amount` out of the balance and returns the new balance.
    ///
    /// The balance may go negative. Status is left alone; see
    /// [`Account::mark_overdrawn`].
    pub fn withdraw_funds(&mut self, amount: Amount) -> Result<Decimal> {
        let balance = self
            .balance
            .checked_sub(amount.value())
            .ok_or(DomainError::BalanceOverflow {
                account_number: self.account_number,
            })?;
        self.balance = balance;
        Ok(balance)
    }

    /// Adds `amount` to the balance and returns the new balance.
    ///
    /// Status is left alone; see [`Account::remove_overdrawn_status`].
    pub fn add_funds(&mut self, amount: Amount) -> Result<Decimal> {
        let balance = self
            .balance
            .checked_add(amount.value())
            .ok_or(DomainError::BalanceOverflow {
                account_number: self.account_number,
            })?;
        self.balance = balance;
        Ok(balance)
    }

    /// Moves an open account to `Overdrawn`.
    ///
    /// No-op from any other status. Returns whether the status changed.
    pub fn mark_overdrawn(&mut self) -> bool {
        if !self.account_status.can_mark_overdrawn() {
            return false;
        }
        self.account_status = AccountStatus::Overdrawn;
        true
    }

    /// Moves an overdrawn account back to `Open`.
    ///
    /// No-op from any other status. Returns whether the status changed.
    pub fn remove_overdrawn_status(&mut self) -> bool {
        if !self.account_status.can_clear_overdrawn() {
            return false;
        }
        self.account_status = AccountStatus::Open;
        true
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.account_number == other.account_number
    }
}

impl Eq for Account {}

impl Hash for Account {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.account_number.hash(state);
    }
}

#[cfg(test)]
pub(crate) fn test_account(number: u64, balance: Decimal) -> Account {
    Account::new(
        AccountNumber::new(number).unwrap(),
        CustomerNumber::new(1),
        "Test Customer",
        balance,
    )
}
