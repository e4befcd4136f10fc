//! The seat availability computation.

use std::collections::HashSet;

use uuid::Uuid;

use seatbook_entity::membership::{Membership, TimeSlot};

/// Seat IDs taken by memberships whose slot overlaps `candidate`.
///
/// Callers pass memberships already filtered to active status and an
/// intersecting date window; a seat with several bookings in
/// non-overlapping slots stays available for the candidate.
pub fn booked_seat_ids(candidate: &TimeSlot, memberships: &[Membership]) -> HashSet<Uuid> {
    memberships
        .iter()
        .filter(|m| candidate.overlaps(&m.slot()))
        .map(|m| m.seat_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use seatbook_entity::membership::MembershipStatus;

    fn membership(seat_id: Uuid, timing: &str) -> Membership {
        let slot = TimeSlot::parse(timing).unwrap();
        let now = Utc::now();
        Membership {
            id: Uuid::new_v4(),
            library_id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            seat_id,
            start_date: now,
            end_date: now + Duration::days(30),
            start_hour: slot.start_hour,
            start_minute: slot.start_minute,
            end_hour: slot.end_hour,
            end_minute: slot.end_minute,
            crosses_midnight: slot.crosses_midnight,
            status: MembershipStatus::Active,
            total_fee: 1000,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_only_overlapping_slots_block_a_seat() {
        let seat_a = Uuid::new_v4();
        let seat_b = Uuid::new_v4();
        let existing = vec![
            membership(seat_a, "06:00 - 12:00"),
            membership(seat_b, "14:00 - 18:00"),
        ];

        let candidate = TimeSlot::parse("10:00 - 13:00").unwrap();
        let booked = booked_seat_ids(&candidate, &existing);
        assert!(booked.contains(&seat_a));
        assert!(!booked.contains(&seat_b));
    }

    #[test]
    fn test_seat_with_disjoint_slots_stays_available() {
        let seat = Uuid::new_v4();
        let existing = vec![
            membership(seat, "06:00 - 09:00"),
            membership(seat, "18:00 - 22:00"),
        ];

        let candidate = TimeSlot::parse("10:00 - 14:00").unwrap();
        assert!(booked_seat_ids(&candidate, &existing).is_empty());
    }

    #[test]
    fn test_midnight_crossing_booking_blocks_morning_candidate() {
        let seat = Uuid::new_v4();
        let existing = vec![membership(seat, "22:00 - 06:00")];

        let morning = TimeSlot::parse("05:00 - 08:00").unwrap();
        assert!(booked_seat_ids(&morning, &existing).contains(&seat));

        let midday = TimeSlot::parse("10:00 - 14:00").unwrap();
        assert!(booked_seat_ids(&midday, &existing).is_empty());
    }

    #[test]
    fn test_duplicate_bookings_on_one_seat_collapse() {
        let seat = Uuid::new_v4();
        let existing = vec![
            membership(seat, "08:00 - 12:00"),
            membership(seat, "09:00 - 11:00"),
        ];

        let candidate = TimeSlot::parse("10:00 - 13:00").unwrap();
        let booked = booked_seat_ids(&candidate, &existing);
        assert_eq!(booked.len(), 1);
    }
}
