//! Account repository abstraction.

mod memory;

pub use memory::InMemoryAccountRepository;

use async_trait::async_trait;
use common::AccountNumber;
use rust_decimal::Decimal;

use crate::account::{Account, Amount, OpenAccount};
use crate::error::Result;

/// Storage for accounts, keyed by account number.
///
/// Implementations must apply each balance change and the status transition
/// it triggers as one atomic step per account, and must not serialize
/// operations that target different accounts.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Returns a snapshot of every stored account.
    async fn list(&self) -> Result<Vec<Account>>;

    /// Returns how many accounts are stored.
    async fn count(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }

    /// Looks up one account.
    ///
    /// Fails with `AccountNotFound` when no account carries the number.
    async fn find(&self, account_number: AccountNumber) -> Result<Account>;

    /// Stores a new account and returns it.
    ///
    /// Fails with `InvalidInput` when the command has no usable account
    /// number and with `DuplicateAccount` when the number is taken.
    async fn create(&self, cmd: OpenAccount) -> Result<Account>;

    /// Deletes an account. Removing an unknown number is a no-op.
    async fn remove(&self, account_number: AccountNumber) -> Result<()>;

    /// Withdraws from an account and marks it overdrawn if it went negative.
    async fn apply_withdrawal(
        &self,
        account_number: AccountNumber,
        amount: Amount,
    ) -> Result<Account>;

    /// Deposits into an account and clears the overdraft if it went positive.
    async fn apply_deposit(
        &self,
        account_number: AccountNumber,
        amount: Amount,
    ) -> Result<Account>;
}

/// Withdrawal followed by the overdraft rule: `OPEN` with a negative balance
/// becomes `OVERDRAWN`. Returns whether the status changed.
pub fn withdraw_and_settle(account: &mut Account, amount: Amount) -> Result<bool> {
    let balance = account.withdraw_funds(amount)?;
    Ok(balance < Decimal::ZERO && account.mark_overdrawn())
}

/// Deposit followed by the recovery rule: `OVERDRAWN` with a positive balance
/// becomes `OPEN`. Returns whether the status changed.
pub fn deposit_and_settle(account: &mut Account, amount: Amount) -> Result<bool> {
    let balance = account.add_funds(amount)?;
    Ok(balance > Decimal::ZERO && account.remove_overdrawn_status())
}
