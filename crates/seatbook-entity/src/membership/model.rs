//! Membership entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::slot::TimeSlot;
use super::status::MembershipStatus;

/// One student's booking of one seat for a calendar date range, recurring
/// daily in the embedded time slot.
///
/// Rows are never physically deleted; withdrawal and date lapse transition
/// `status` to `Expired` instead.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Membership {
    /// Unique membership identifier.
    pub id: Uuid,
    /// Owning library (tenant).
    pub library_id: Uuid,
    /// The holding student.
    pub student_id: Uuid,
    /// The occupied seat.
    pub seat_id: Uuid,
    /// First day of the booking.
    pub start_date: DateTime<Utc>,
    /// Last day of the booking; set to the withdrawal time on removal.
    pub end_date: DateTime<Utc>,
    /// Slot start hour.
    pub start_hour: i16,
    /// Slot start minute.
    pub start_minute: i16,
    /// Slot end hour.
    pub end_hour: i16,
    /// Slot end minute.
    pub end_minute: i16,
    /// Whether the slot spans across 00:00.
    pub crosses_midnight: bool,
    /// Authoritative lifecycle state.
    pub status: MembershipStatus,
    /// Total fee for the booking, in whole rupees.
    pub total_fee: i64,
    /// When the membership was created.
    pub created_at: DateTime<Utc>,
    /// When the membership was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Membership {
    /// The recurring daily slot this membership occupies.
    ///
    /// Stored columns are validated at insert time, so reconstruction is
    /// direct rather than re-validated.
    pub fn slot(&self) -> TimeSlot {
        TimeSlot {
            start_hour: self.start_hour,
            start_minute: self.start_minute,
            end_hour: self.end_hour,
            end_minute: self.end_minute,
            crosses_midnight: self.crosses_midnight,
        }
    }

    /// The slot formatted as `"HH:MM - HH:MM"`.
    pub fn timing(&self) -> String {
        self.slot().to_string()
    }

    /// Whether this membership's date range intersects `[window_start, window_end]`.
    pub fn date_range_intersects(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> bool {
        self.start_date <= window_end && self.end_date >= window_start
    }
}

/// Find the first active membership whose slot overlaps `candidate`.
///
/// Callers pass memberships already filtered to the relevant seat, status,
/// and date window; this applies only the time-of-day test.
pub fn find_slot_conflict<'a>(
    candidate: &TimeSlot,
    existing: &'a [Membership],
) -> Option<&'a Membership> {
    existing.iter().find(|m| candidate.overlaps(&m.slot()))
}

/// A membership expiring soon, joined with its tenant's push-delivery state.
///
/// Produced by the expiry scan query: active memberships whose `end_date`
/// falls inside the horizon window and which have no dedup log row yet.
#[derive(Debug, Clone, FromRow)]
pub struct ExpiringMembership {
    /// The expiring membership.
    pub membership_id: Uuid,
    /// Owning library (tenant grouping key).
    pub library_id: Uuid,
    /// Renewal amount contributed by this membership.
    pub total_fee: i64,
    /// When the membership ends.
    pub end_date: DateTime<Utc>,
    /// The owner's registered push token, if any.
    pub push_token: Option<String>,
    /// Whether the owner has notifications enabled.
    pub notifications_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership(timing: &str) -> Membership {
        let slot = TimeSlot::parse(timing).unwrap();
        let now = Utc::now();
        Membership {
            id: Uuid::new_v4(),
            library_id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            seat_id: Uuid::new_v4(),
            start_date: now,
            end_date: now + chrono::Duration::days(30),
            start_hour: slot.start_hour,
            start_minute: slot.start_minute,
            end_hour: slot.end_hour,
            end_minute: slot.end_minute,
            crosses_midnight: slot.crosses_midnight,
            status: MembershipStatus::Active,
            total_fee: 1200,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_slot_round_trip() {
        let m = membership("22:00 - 02:00");
        assert_eq!(m.timing(), "22:00 - 02:00");
        assert!(m.slot().crosses_midnight);
    }

    #[test]
    fn test_date_range_intersects() {
        let m = membership("09:00 - 12:00");
        let inside = m.start_date + chrono::Duration::days(5);
        assert!(m.date_range_intersects(inside, inside + chrono::Duration::days(1)));
        let after = m.end_date + chrono::Duration::days(1);
        assert!(!m.date_range_intersects(after, after + chrono::Duration::days(3)));
    }

    #[test]
    fn test_find_slot_conflict_picks_overlapping() {
        let existing = vec![membership("06:00 - 09:00"), membership("09:00 - 12:00")];
        let candidate = TimeSlot::parse("11:00 - 14:00").unwrap();
        let hit = find_slot_conflict(&candidate, &existing).expect("conflict");
        assert_eq!(hit.timing(), "09:00 - 12:00");

        let free = TimeSlot::parse("13:00 - 15:00").unwrap();
        assert!(find_slot_conflict(&free, &existing).is_none());
    }
}
