use serde::{Deserialize, Serialize};

/// Unique identifier of a bank account.
///
/// Always a positive integer no larger than `i64::MAX`. The value is the
/// account's sole identity: it is used as the repository key and for equality
/// between accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct AccountNumber(u64);

impl AccountNumber {
    /// Largest accepted account number.
    pub const MAX: u64 = i64::MAX as u64;

    /// Creates an account number, returning `None` for zero or for values
    /// above [`AccountNumber::MAX`].
    pub fn new(value: u64) -> Option<Self> {
        (1..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Returns the underlying integer.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a value cannot be used as an account number.
///
/// Carries the rejected input as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAccountNumber(pub String);

impl std::fmt::Display for InvalidAccountNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "account number must be a positive integer, got '{}'",
            self.0
        )
    }
}

impl std::error::Error for InvalidAccountNumber {}

impl TryFrom<u64> for AccountNumber {
    type Error = InvalidAccountNumber;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| InvalidAccountNumber(value.to_string()))
    }
}

impl TryFrom<i64> for AccountNumber {
    type Error = InvalidAccountNumber;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidAccountNumber(value.to_string()))
    }
}

impl From<AccountNumber> for u64 {
    fn from(number: AccountNumber) -> Self {
        number.0
    }
}

impl From<AccountNumber> for i64 {
    fn from(number: AccountNumber) -> Self {
        // Bounded by AccountNumber::MAX.
        number.0 as i64
    }
}

impl std::str::FromStr for AccountNumber {
    type Err = InvalidAccountNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidAccountNumber(s.to_string()))
    }
}

/// Reference to a customer record held outside this service.
///
/// Opaque: no validation is performed on the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerNumber(i64);

impl CustomerNumber {
    /// Wraps a raw customer number.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CustomerNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CustomerNumber {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
