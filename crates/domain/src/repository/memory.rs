use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use common::AccountNumber;
use tokio::sync::{Mutex, RwLock};

use super::{AccountRepository, deposit_and_settle, withdraw_and_settle};
use crate::account::{Account, AccountStatus, Amount, OpenAccount};
use crate::error::{DomainError, Result};

type AccountSlot = Arc<Mutex<Account>>;

/// In-memory account repository.
///
/// Every account sits behind its own mutex, and the map of slots behind a
/// read/write lock. Balance operations hold the map's read guard plus the one
/// account's mutex, so they run in parallel across accounts and one at a time
/// per account. Creation and removal take the write guard, which waits for
/// in-flight balance operations to finish.
///
/// Cloning is cheap and yields a handle to the same accounts.
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountNumber, AccountSlot>>>,
}

impl InMemoryAccountRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `accounts`.
    ///
    /// When numbers repeat, the first account wins.
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let mut map = HashMap::new();
        for account in accounts {
            map.entry(account.account_number())
                .or_insert_with(|| Arc::new(Mutex::new(account)));
        }
        Self {
            accounts: Arc::new(RwLock::new(map)),
        }
    }

    /// Returns the number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Returns true if no account is stored.
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    async fn update<F>(&self, account_number: AccountNumber, op: F) -> Result<Account>
    where
        F: FnOnce(&mut Account) -> Result<bool> + Send,
    {
        let accounts = self.accounts.read().await;
        let slot = accounts
            .get(&account_number)
            .ok_or(DomainError::AccountNotFound { account_number })?;

        let mut account = slot.lock().await;
        let transitioned = op(&mut *account)?;
        if transitioned {
            let counter = match account.status() {
                AccountStatus::Overdrawn => "account_overdrawn_total",
                _ => "account_overdraft_cleared_total",
            };
            metrics::counter!(counter).increment(1);
            tracing::info!(
                %account_number,
                status = %account.status(),
                balance = %account.balance(),
                "account status changed"
            );
        }
        Ok(account.clone())
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn list(&self) -> Result<Vec<Account>> {
        let accounts = self.accounts.read().await;
        let mut snapshot = Vec::with_capacity(accounts.len());
        for slot in accounts.values() {
            snapshot.push(slot.lock().await.clone());
        }
        snapshot.sort_by_key(Account::account_number);
        Ok(snapshot)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.len().await)
    }

    async fn find(&self, account_number: AccountNumber) -> Result<Account> {
        let accounts = self.accounts.read().await;
        let slot = accounts
            .get(&account_number)
            .ok_or(DomainError::AccountNotFound { account_number })?;
        let account = slot.lock().await.clone();
        Ok(account)
    }

    async fn create(&self, cmd: OpenAccount) -> Result<Account> {
        let account = cmd.into_account()?;
        let account_number = account.account_number();

        let mut accounts = self.accounts.write().await;
        match accounts.entry(account_number) {
            Entry::Occupied(_) => Err(DomainError::DuplicateAccount { account_number }),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(account.clone())));
                Ok(account)
            }
        }
    }

    async fn remove(&self, account_number: AccountNumber) -> Result<()> {
        let removed = self.accounts.write().await.remove(&account_number);
        if removed.is_none() {
            tracing::debug!(%account_number, "remove of unknown account ignored");
        }
        Ok(())
    }

    async fn apply_withdrawal(
        &self,
        account_number: AccountNumber,
        amount: Amount,
    ) -> Result<Account> {
        self.update(account_number, |account| withdraw_and_settle(account, amount))
            .await
    }

    async fn apply_deposit(
        &self,
        account_number: AccountNumber,
        amount: Amount,
    ) -> Result<Account> {
        self.update(account_number, |account| deposit_and_settle(account, amount))
            .await
    }
}
