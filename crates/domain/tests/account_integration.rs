//! Integration tests for the account service.
//!
//! These tests drive the service end to end over the in-memory repository:
//! balance arithmetic, status transitions, error propagation and
//! concurrent access.

use domain::{
    Account, AccountNumber, AccountService, AccountStatus, CustomerNumber, DomainError,
    InMemoryAccountRepository, OpenAccount,
};
use rust_decimal::Decimal;

fn number(n: u64) -> AccountNumber {
    AccountNumber::new(n).unwrap()
}

/// Service holding one open account `1` with the given balance.
fn service_with_balance(balance: Decimal) -> AccountService<InMemoryAccountRepository> {
    let account = Account::new(number(1), CustomerNumber::new(100), "Test Holder", balance);
    AccountService::new(InMemoryAccountRepository::with_accounts([account]))
}

mod status_transitions {
    use super::*;

    #[tokio::test]
    async fn withdrawal_below_zero_marks_overdrawn() {
        let service = service_with_balance(Decimal::new(10000, 2));

        let account = service.withdraw(number(1), "150.00").await.unwrap();

        assert_eq!(account.balance(), Decimal::new(-5000, 2));
        assert_eq!(account.status(), AccountStatus::Overdrawn);
    }

    #[tokio::test]
    async fn deposit_above_zero_clears_overdraft() {
        let service = service_with_balance(Decimal::new(10000, 2));
        service.withdraw(number(1), "150.00").await.unwrap();

        let account = service.deposit(number(1), "75.00").await.unwrap();

        assert_eq!(account.balance(), Decimal::new(2500, 2));
        assert_eq!(account.status(), AccountStatus::Open);
    }

    #[tokio::test]
    async fn reaching_exactly_zero_fires_nothing() {
        let service = service_with_balance(Decimal::new(10000, 2));

        let account = service.withdraw(number(1), "100.00").await.unwrap();
        assert_eq!(account.balance().to_string(), "0.00");
        assert_eq!(account.status(), AccountStatus::Open);

        service.withdraw(number(1), "20.00").await.unwrap();
        let account = service.deposit(number(1), "20.00").await.unwrap();
        assert!(account.balance().is_zero());
        assert_eq!(account.status(), AccountStatus::Overdrawn);
    }
}

mod precision {
    use super::*;

    #[tokio::test]
    async fn repeated_cent_round_trips_are_exact() {
        let start = Decimal::new(35423, 2);
        let service = service_with_balance(start);

        for _ in 0..10 {
            service.deposit(number(1), "10.01").await.unwrap();
            service.withdraw(number(1), "10.01").await.unwrap();
        }

        let account = service.get_account(number(1)).await.unwrap();
        assert_eq!(account.balance(), start);
        assert_eq!(account.balance().to_string(), "354.23");
    }

    #[tokio::test]
    async fn tenths_add_up_exactly() {
        let service = service_with_balance(Decimal::ZERO);

        for _ in 0..3 {
            service.deposit(number(1), "0.1").await.unwrap();
        }

        let account = service.get_account(number(1)).await.unwrap();
        assert_eq!(account.balance(), Decimal::new(3, 1));
    }
}

mod errors {
    use super::*;

    #[tokio::test]
    async fn invalid_amount_leaves_account_untouched() {
        let service = service_with_balance(Decimal::new(10000, 2));

        let err = service.withdraw(number(1), "1O0").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidAmount { .. }));

        let err = service.deposit(number(1), "").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidAmount { .. }));

        let account = service.get_account(number(1)).await.unwrap();
        assert_eq!(account.balance(), Decimal::new(10000, 2));
        assert_eq!(account.status(), AccountStatus::Open);
    }

    #[tokio::test]
    async fn unknown_account_is_not_found_everywhere() {
        let service = service_with_balance(Decimal::ONE);
        let missing = number(404);

        assert!(matches!(
            service.get_account(missing).await,
            Err(DomainError::AccountNotFound { .. })
        ));
        assert!(matches!(
            service.withdraw(missing, "1").await,
            Err(DomainError::AccountNotFound { .. })
        ));
        assert!(matches!(
            service.deposit(missing, "1").await,
            Err(DomainError::AccountNotFound { .. })
        ));
        assert_eq!(service.list_accounts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn open_account_requires_number() {
        let service = service_with_balance(Decimal::ONE);

        let err = service
            .open_account(OpenAccount {
                customer_name: "No Number".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(service.list_accounts().await.unwrap().len(), 1);
    }
}

mod lifecycle {
    use super::*;

    #[tokio::test]
    async fn open_then_close() {
        let service = AccountService::new(InMemoryAccountRepository::new());

        let opened = service
            .open_account(OpenAccount::new(
                number(324324),
                CustomerNumber::new(112244),
                "Sandy Holmes",
                Decimal::new(15455, 2),
            ))
            .await
            .unwrap();
        assert_eq!(opened.status(), AccountStatus::Open);
        assert_eq!(service.list_accounts().await.unwrap(), vec![opened.clone()]);

        service.close_account(number(324324)).await.unwrap();
        service.close_account(number(324324)).await.unwrap();

        assert!(service.list_accounts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reopening_a_taken_number_is_rejected() {
        let service = service_with_balance(Decimal::ONE);

        let err = service
            .open_account(OpenAccount::new(
                number(1),
                CustomerNumber::new(5),
                "Impostor",
                Decimal::TEN,
            ))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::DuplicateAccount {
                account_number: number(1)
            }
        );
        let account = service.get_account(number(1)).await.unwrap();
        assert_eq!(account.customer_name(), "Test Holder");
    }
}

mod concurrency {
    use std::sync::Arc;

    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn parallel_deposits_and_withdrawals_balance_out() {
        let service = Arc::new(service_with_balance(Decimal::new(5000, 2)));

        let mut handles = Vec::new();
        for i in 0..100 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    service.deposit(number(1), "0.25").await
                } else {
                    service.withdraw(number(1), "0.25").await
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let account = service.get_account(number(1)).await.unwrap();
        assert_eq!(account.balance(), Decimal::new(5000, 2));
        assert_eq!(account.status(), AccountStatus::Open);
    }
}
