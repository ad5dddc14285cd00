//! Account service providing the operations exposed over the API.

use common::AccountNumber;

use crate::error::Result;
use crate::repository::AccountRepository;

use super::{Account, Amount, OpenAccount};

/// Service for managing accounts.
///
/// Wraps a repository, takes amounts as decimal text, and records logs and
/// metrics for every operation.
pub struct AccountService<R: AccountRepository> {
    repository: R,
}

impl<R: AccountRepository> AccountService<R> {
    /// Creates a new account service over the given repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Lists every account.
    #[tracing::instrument(skip(self))]
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list().await
    }

    /// Loads one account.
    #[tracing::instrument(skip(self))]
    pub async fn get_account(&self, account_number: AccountNumber) -> Result<Account> {
        self.repository.find(account_number).await
    }

    /// Opens a new account.
    #[tracing::instrument(skip(self, cmd), fields(account_number = ?cmd.account_number))]
    pub async fn open_account(&self, cmd: OpenAccount) -> Result<Account> {
        let account = self.repository.create(cmd).await?;
        metrics::counter!("accounts_opened_total").increment(1);
        tracing::info!(
            account_number = %account.account_number(),
            balance = %account.balance(),
            "account opened"
        );
        Ok(account)
    }

    /// Removes an account. Unknown numbers are ignored.
    #[tracing::instrument(skip(self))]
    pub async fn close_account(&self, account_number: AccountNumber) -> Result<()> {
        self.repository.remove(account_number).await?;
        metrics::counter!("account_removals_total").increment(1);
        Ok(())
    }

    /// Withdraws the amount written in `amount` from an account.
    ///
    /// The text is parsed before the account is touched, so an invalid
    /// amount never changes balance or status.
    #[tracing::instrument(skip(self))]
    pub async fn withdraw(&self, account_number: AccountNumber, amount: &str) -> Result<Account> {
        let amount: Amount = amount.parse()?;
        let account = self
            .repository
            .apply_withdrawal(account_number, amount)
            .await?;
        metrics::counter!("account_withdrawals_total").increment(1);
        Ok(account)
    }

    /// Deposits the amount written in `amount` into an account.
    ///
    /// The text is parsed before the account is touched, so an invalid
    /// amount never changes balance or status.
    #[tracing::instrument(skip(self))]
    pub async fn deposit(&self, account_number: AccountNumber, amount: &str) -> Result<Account> {
        let amount: Amount = amount.parse()?;
        let account = self.repository.apply_deposit(account_number, amount).await?;
        metrics::counter!("account_deposits_total").increment(1);
        Ok(account)
    }
}
