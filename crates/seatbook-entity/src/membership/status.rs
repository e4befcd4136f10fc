//! Membership status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a membership.
///
/// The status column is authoritative: a membership is only "active" while
/// its status says so. Date-lapsed rows are transitioned to `Expired` by an
/// explicit sweep, never derived implicitly on the read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "membership_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    /// Currently occupying the seat.
    Active,
    /// Ended, either by date lapse or student withdrawal.
    Expired,
}

impl MembershipStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MembershipStatus {
    type Err = seatbook_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "expired" => Ok(Self::Expired),
            _ => Err(seatbook_core::AppError::validation(format!(
                "Invalid membership status: '{s}'. Expected 'active' or 'expired'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "active".parse::<MembershipStatus>().unwrap(),
            MembershipStatus::Active
        );
        assert_eq!(
            "EXPIRED".parse::<MembershipStatus>().unwrap(),
            MembershipStatus::Expired
        );
        assert!("pending".parse::<MembershipStatus>().is_err());
    }
}
