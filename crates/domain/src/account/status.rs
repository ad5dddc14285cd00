//! Account status state machine.

use serde::{Deserialize, Serialize};

/// The status of an account.
///
/// State transitions:
/// ```text
/// Open ◄──── deposit leaves balance > 0 ────┐
///   │                                       │
///   └──── withdrawal leaves balance < 0 ──► Overdrawn
///
/// Closed: no transition leads here or out of here.
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    /// Account is in good standing.
    #[default]
    Open,

    /// Balance went negative while the account was open.
    Overdrawn,

    /// Account is closed.
    Closed,
}

impl AccountStatus {
    /// Returns true if the account can move to `Overdrawn` from this status.
    pub fn can_mark_overdrawn(&self) -> bool {
        matches!(self, AccountStatus::Open)
    }

    /// Returns true if the overdraft can be cleared from this status.
    pub fn can_clear_overdrawn(&self) -> bool {
        matches!(self, AccountStatus::Overdrawn)
    }

    /// Returns true if the account is closed.
    pub fn is_closed(&self) -> bool {
        matches!(self, AccountStatus::Closed)
    }

    /// Returns the status name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Open => "OPEN",
            AccountStatus::Overdrawn => "OVERDRAWN",
            AccountStatus::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
