//! Domain error types.

use common::AccountNumber;
use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// No account carries the requested number.
    #[error("Account with id of {account_number} does not exist")]
    AccountNotFound { account_number: AccountNumber },

    /// A creation request is missing or carries an unusable account number.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Amount text does not parse as a decimal.
    #[error("Invalid amount '{amount}': {reason}")]
    InvalidAmount { amount: String, reason: String },

    /// An account with the same number is already stored.
    #[error("Account with id of {account_number} already exists")]
    DuplicateAccount { account_number: AccountNumber },

    /// The resulting balance does not fit the decimal range.
    #[error("Balance of account {account_number} would overflow")]
    BalanceOverflow { account_number: AccountNumber },
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
