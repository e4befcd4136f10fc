//! Library entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::LibraryStatus;

/// A library: the unit of tenancy owning seats, students, and memberships.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Library {
    /// Unique library identifier.
    pub id: Uuid,
    /// Owning tenant.
    pub owner_id: Uuid,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Subscription window start.
    pub subscription_start: DateTime<Utc>,
    /// Subscription window end.
    pub subscription_end: DateTime<Utc>,
    /// Subscription state.
    pub status: LibraryStatus,
    /// When the library was created.
    pub created_at: DateTime<Utc>,
    /// When the library was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Library {
    /// Whether booking writes are currently allowed for this library.
    ///
    /// Status is checked first; a `trial` or `active` library is still gated
    /// once its subscription window has passed.
    pub fn subscription_allows_writes(&self, now: DateTime<Utc>) -> bool {
        !matches!(self.status, LibraryStatus::Expired) && now <= self.subscription_end
    }

    /// Whole days remaining on the subscription, clamped at zero.
    pub fn subscription_days_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.subscription_end - now).num_days().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn library(status: LibraryStatus, ends_in_days: i64) -> Library {
        let now = Utc::now();
        Library {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: "Test Library".into(),
            address: "MG Road".into(),
            subscription_start: now - Duration::days(10),
            subscription_end: now + Duration::days(ends_in_days),
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_subscription_gating() {
        let now = Utc::now();
        assert!(library(LibraryStatus::Trial, 20).subscription_allows_writes(now));
        assert!(library(LibraryStatus::Active, 20).subscription_allows_writes(now));
        assert!(!library(LibraryStatus::Expired, 20).subscription_allows_writes(now));
        assert!(!library(LibraryStatus::Active, -1).subscription_allows_writes(now));
    }

    #[test]
    fn test_days_remaining_clamped() {
        let now = Utc::now();
        assert_eq!(library(LibraryStatus::Active, -5).subscription_days_remaining(now), 0);
        assert!(library(LibraryStatus::Active, 10).subscription_days_remaining(now) >= 9);
    }
}
