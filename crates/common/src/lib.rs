//! Identity types shared by the domain and API crates.

mod types;

pub use types::{AccountNumber, CustomerNumber, InvalidAccountNumber};
