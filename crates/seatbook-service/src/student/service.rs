//! The student roster for a library.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use seatbook_core::error::AppError;
use seatbook_core::traits::Clock;
use seatbook_database::repositories::{LibraryRepository, StudentRepository};
use seatbook_entity::membership::MembershipStatus;
use seatbook_entity::student::StudentRosterRow;

use crate::context::RequestContext;

/// One roster line: a student with their current membership, ready for
/// display.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RosterEntry {
    /// Student identifier.
    pub student_id: Uuid,
    /// Full name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Occupied seat number, if any.
    pub seat_number: Option<String>,
    /// Booked timing as `"HH:MM - HH:MM"`, if any.
    pub timing: Option<String>,
    /// Current membership status, if any.
    pub membership_status: Option<MembershipStatus>,
    /// Membership end date, if any.
    pub membership_end_date: Option<DateTime<Utc>>,
    /// Days until the membership ends, clamped at zero.
    pub days_remaining: Option<i64>,
}

/// Roster queries over a library's students.
#[derive(Debug, Clone)]
pub struct StudentService {
    /// Library repository.
    library_repo: Arc<LibraryRepository>,
    /// Student repository.
    student_repo: Arc<StudentRepository>,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl StudentService {
    /// Creates a new student service.
    pub fn new(
        library_repo: Arc<LibraryRepository>,
        student_repo: Arc<StudentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            library_repo,
            student_repo,
            clock,
        }
    }

    /// The roster for a library: active students with their current
    /// membership, seat, and remaining days.
    pub async fn roster(
        &self,
        ctx: &RequestContext,
        library_id: Uuid,
    ) -> Result<Vec<RosterEntry>, AppError> {
        let library = self
            .library_repo
            .find_owned(library_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Library not found"))?;

        let now = self.clock.now();
        let rows = self.student_repo.list_roster(library.id).await?;
        Ok(rows.into_iter().map(|r| roster_entry(r, now)).collect())
    }
}

/// Shape one roster row for display.
fn roster_entry(row: StudentRosterRow, now: DateTime<Utc>) -> RosterEntry {
    let timing = row.slot().map(|s| s.to_string());
    let days_remaining = row
        .membership_end_date
        .map(|end| (end - now).num_days().max(0));

    RosterEntry {
        student_id: row.student_id,
        name: row.name,
        phone: row.phone,
        seat_number: row.seat_number,
        timing,
        membership_status: row.membership_status,
        membership_end_date: row.membership_end_date,
        days_remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn row(end_in_days: Option<i64>) -> StudentRosterRow {
        let now = Utc::now();
        StudentRosterRow {
            student_id: Uuid::new_v4(),
            name: "Asha".into(),
            phone: "9999999999".into(),
            is_active: true,
            seat_number: end_in_days.map(|_| "4".into()),
            membership_status: end_in_days.map(|_| MembershipStatus::Active),
            membership_end_date: end_in_days.map(|d| now + Duration::days(d)),
            start_hour: end_in_days.map(|_| 9),
            start_minute: end_in_days.map(|_| 0),
            end_hour: end_in_days.map(|_| 12),
            end_minute: end_in_days.map(|_| 30),
            crosses_midnight: end_in_days.map(|_| false),
        }
    }

    #[test]
    fn test_roster_entry_formats_timing_and_days() {
        let entry = roster_entry(row(Some(10)), Utc::now());
        assert_eq!(entry.timing.as_deref(), Some("09:00 - 12:30"));
        assert!(entry.days_remaining.unwrap() >= 9);
    }

    #[test]
    fn test_days_remaining_clamped_at_zero() {
        let entry = roster_entry(row(Some(-5)), Utc::now());
        assert_eq!(entry.days_remaining, Some(0));
    }

    #[test]
    fn test_student_without_membership_has_empty_columns() {
        let entry = roster_entry(row(None), Utc::now());
        assert!(entry.timing.is_none());
        assert!(entry.seat_number.is_none());
        assert!(entry.days_remaining.is_none());
    }
}
