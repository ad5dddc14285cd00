//! Domain layer for the bank accounts service.
//!
//! This crate provides:
//! - the `Account` entity with its balance arithmetic and status state machine
//! - the `AccountRepository` trait and its in-memory implementation
//! - `AccountService`, which exposes the operations used by the API

pub mod account;
pub mod error;
pub mod repository;

pub use account::{Account, AccountService, AccountStatus, Amount, OpenAccount};
pub use common::{AccountNumber, CustomerNumber};
pub use error::{DomainError, Result};
pub use repository::{
    AccountRepository, InMemoryAccountRepository, deposit_and_settle, withdraw_and_settle,
};
