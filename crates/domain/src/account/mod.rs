//! Account entity and related types.

mod amount;
mod commands;
mod entity;
mod service;
mod status;

pub use amount::Amount;
pub use commands::OpenAccount;
pub use entity::Account;
pub use service::AccountService;
pub use status::AccountStatus;

#[cfg(test)]
pub(crate) use entity::test_account;
