//! Library subscription status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription state of a library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "library_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LibraryStatus {
    /// Initial 30-day trial window.
    Trial,
    /// Paid subscription.
    Active,
    /// Subscription lapsed; write operations are gated.
    Expired,
}

impl LibraryStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trial => "trial",
            Self::Active => "active",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for LibraryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
