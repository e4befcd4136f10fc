//! Availability queries and booking admission with tenancy enforcement.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

use seatbook_core::error::AppError;
use seatbook_core::traits::Clock;
use seatbook_database::repositories::membership::{BookSeatParams, BookingRecord};
use seatbook_database::repositories::{
    LibraryRepository, MembershipRepository, SeatRepository, StudentRepository,
};
use seatbook_entity::library::Library;
use seatbook_entity::membership::TimeSlot;
use seatbook_entity::seat::Seat;
use seatbook_entity::student::Student;

use crate::booking::availability::booked_seat_ids;
use crate::context::RequestContext;

/// Request for an availability query.
#[derive(Debug, Clone)]
pub struct AvailabilityRequest {
    /// The library to query.
    pub library_id: Uuid,
    /// Candidate timing as `"HH:MM - HH:MM"`.
    pub timing: String,
    /// How many days the prospective booking runs, starting today.
    pub days: i64,
}

/// Result of an availability query.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AvailabilityReport {
    /// Seats free for the candidate slot and window.
    pub available_seats: Vec<Seat>,
    /// Total seats in the library.
    pub total_seats: usize,
    /// How many seats are free.
    pub available_count: usize,
    /// How many seats are taken for the candidate slot.
    pub booked_count: usize,
}

/// Request to admit a new booking.
#[derive(Debug, Clone)]
pub struct AdmitBookingRequest {
    /// The library to book in.
    pub library_id: Uuid,
    /// Human-facing seat number.
    pub seat_number: String,
    /// New student's name.
    pub student_name: String,
    /// New student's phone.
    pub student_phone: String,
    /// Booked timing as `"HH:MM - HH:MM"`.
    pub timing: String,
    /// How many days the booking runs, starting today.
    pub days: i64,
    /// Total fee in whole rupees.
    pub total_fee: i64,
    /// Payment mode for the admission payment.
    pub payment_mode: String,
}

/// Seat availability and booking admission.
#[derive(Debug, Clone)]
pub struct BookingService {
    /// Library repository.
    library_repo: Arc<LibraryRepository>,
    /// Seat repository.
    seat_repo: Arc<SeatRepository>,
    /// Membership repository.
    membership_repo: Arc<MembershipRepository>,
    /// Student repository.
    student_repo: Arc<StudentRepository>,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        library_repo: Arc<LibraryRepository>,
        seat_repo: Arc<SeatRepository>,
        membership_repo: Arc<MembershipRepository>,
        student_repo: Arc<StudentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            library_repo,
            seat_repo,
            membership_repo,
            student_repo,
            clock,
        }
    }

    /// Resolves a library for the acting owner, hiding other tenants'
    /// libraries behind the same error as nonexistent ones.
    async fn owned_library(&self, ctx: &RequestContext, library_id: Uuid) -> Result<Library, AppError> {
        self.library_repo
            .find_owned(library_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Library not found"))
    }

    /// Computes which seats are free for a candidate slot and date window.
    pub async fn find_available_seats(
        &self,
        ctx: &RequestContext,
        req: AvailabilityRequest,
    ) -> Result<AvailabilityReport, AppError> {
        let library = self.owned_library(ctx, req.library_id).await?;
        let (start_date, end_date) = booking_window(self.clock.now(), req.days)?;
        let candidate = TimeSlot::parse(&req.timing)?;

        let memberships = self
            .membership_repo
            .find_active_intersecting(library.id, start_date, end_date)
            .await?;
        let booked = booked_seat_ids(&candidate, &memberships);

        let seats = self.seat_repo.find_by_library(library.id).await?;
        let total_seats = seats.len();
        let available_seats: Vec<Seat> = seats
            .into_iter()
            .filter(|s| !booked.contains(&s.id))
            .collect();

        Ok(AvailabilityReport {
            available_count: available_seats.len(),
            booked_count: booked.len(),
            total_seats,
            available_seats,
        })
    }

    /// Admits a booking: enrolls the student and creates their membership
    /// and payment atomically, rejecting slot conflicts.
    pub async fn admit(
        &self,
        ctx: &RequestContext,
        req: AdmitBookingRequest,
    ) -> Result<BookingRecord, AppError> {
        let library = self.owned_library(ctx, req.library_id).await?;

        let now = self.clock.now();
        if !library.subscription_allows_writes(now) {
            return Err(AppError::authorization(
                "Subscription has expired. Renew to add students",
            ));
        }

        let (start_date, end_date) = booking_window(now, req.days)?;
        if req.total_fee < 0 {
            return Err(AppError::validation("Fee cannot be negative"));
        }
        let slot = TimeSlot::parse(&req.timing)?;

        let seat = self
            .seat_repo
            .find_by_number(library.id, &req.seat_number)
            .await?
            .ok_or_else(|| AppError::not_found("Seat not found"))?;

        let record = self
            .membership_repo
            .book_seat(&BookSeatParams {
                library_id: library.id,
                seat_id: seat.id,
                student_name: req.student_name,
                student_phone: req.student_phone,
                slot,
                start_date,
                end_date,
                total_fee: req.total_fee,
                payment_mode: req.payment_mode,
            })
            .await?;

        info!(
            library_id = %library.id,
            membership_id = %record.membership.id,
            seat = %seat.seat_number,
            "booking admitted"
        );

        Ok(record)
    }

    /// Withdraws a student: expires their active memberships and
    /// soft-deletes the student record.
    pub async fn withdraw(&self, ctx: &RequestContext, student_id: Uuid) -> Result<(), AppError> {
        let student = self
            .student_repo
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found"))?;

        // Tenancy check through the student's library.
        let owned = self
            .library_repo
            .find_owned(student.library_id, ctx.owner_id)
            .await?;
        if owned.is_none() {
            return Err(AppError::not_found("Student not found"));
        }

        ensure_withdrawable(&student)?;

        self.student_repo.withdraw(student.id, self.clock.now()).await?;

        info!(student_id = %student.id, "student withdrawn");
        Ok(())
    }
}

/// Computes the absolute date window for a booking that starts today and
/// runs for `days` days.
fn booking_window(now: DateTime<Utc>, days: i64) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    if days < 1 {
        return Err(AppError::validation("Booking must run for at least 1 day"));
    }
    Ok((now, now + Duration::days(days)))
}

/// A student can only be withdrawn once; the second attempt conflicts.
fn ensure_withdrawable(student: &Student) -> Result<(), AppError> {
    if !student.is_active {
        return Err(AppError::conflict("Student is already inactive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use seatbook_core::error::ErrorKind;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap()
    }

    fn student(is_active: bool) -> Student {
        Student {
            id: Uuid::new_v4(),
            library_id: Uuid::new_v4(),
            name: "Asha".to_string(),
            phone: "9000000000".to_string(),
            is_active,
            created_at: now(),
            updated_at: now(),
        }
    }

    #[test]
    fn test_window_starts_today_and_runs_for_days() {
        let (start, end) = booking_window(now(), 30).unwrap();
        assert_eq!(start, now());
        assert_eq!(end, now() + Duration::days(30));
    }

    #[test]
    fn test_window_rejects_non_positive_days() {
        for days in [0, -5] {
            let err = booking_window(now(), days).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
        }
    }

    #[test]
    fn test_withdraw_check_conflicts_on_inactive_student() {
        assert!(ensure_withdrawable(&student(true)).is_ok());

        let err = ensure_withdrawable(&student(false)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }
}
