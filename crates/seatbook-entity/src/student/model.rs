//! Student entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::membership::{MembershipStatus, TimeSlot};

/// A student enrolled at a library.
///
/// Removal soft-deletes via `is_active`; the student's memberships are
/// expired in the same transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Unique student identifier.
    pub id: Uuid,
    /// Owning library.
    pub library_id: Uuid,
    /// Full name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Soft-delete flag; false once withdrawn.
    pub is_active: bool,
    /// When the student enrolled.
    pub created_at: DateTime<Utc>,
    /// When the student was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A student joined with their current active membership and seat, as
/// returned by the roster query. Membership columns are absent for students
/// with no active membership.
#[derive(Debug, Clone, FromRow)]
pub struct StudentRosterRow {
    /// Student identifier.
    pub student_id: Uuid,
    /// Full name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Soft-delete flag.
    pub is_active: bool,
    /// Occupied seat number, if any.
    pub seat_number: Option<String>,
    /// Active membership status, if any.
    pub membership_status: Option<MembershipStatus>,
    /// Active membership end date, if any.
    pub membership_end_date: Option<DateTime<Utc>>,
    /// Slot start hour, if any.
    pub start_hour: Option<i16>,
    /// Slot start minute, if any.
    pub start_minute: Option<i16>,
    /// Slot end hour, if any.
    pub end_hour: Option<i16>,
    /// Slot end minute, if any.
    pub end_minute: Option<i16>,
    /// Midnight-crossing flag, if any.
    pub crosses_midnight: Option<bool>,
}

impl StudentRosterRow {
    /// The active membership's slot, when one exists.
    pub fn slot(&self) -> Option<TimeSlot> {
        Some(TimeSlot {
            start_hour: self.start_hour?,
            start_minute: self.start_minute?,
            end_hour: self.end_hour?,
            end_minute: self.end_minute?,
            crosses_midnight: self.crosses_midnight?,
        })
    }

    /// Whether the student currently holds an active membership.
    pub fn has_active_membership(&self) -> bool {
        self.membership_status == Some(MembershipStatus::Active)
    }
}
