//! Membership repository implementation.
//!
//! Holds the booking admission transaction: the conflict check is re-run
//! under a row lock on the seat so that two concurrent admissions for the
//! same seat cannot both pass the check before either inserts.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use seatbook_core::error::{AppError, ErrorKind};
use seatbook_core::result::AppResult;
use seatbook_entity::membership::{
    ExpiringMembership, Membership, TimeSlot, find_slot_conflict,
};
use seatbook_entity::payment::Payment;
use seatbook_entity::student::Student;

/// Parameters for admitting a new booking.
#[derive(Debug, Clone)]
pub struct BookSeatParams {
    /// Owning library.
    pub library_id: Uuid,
    /// The resolved seat.
    pub seat_id: Uuid,
    /// New student's name.
    pub student_name: String,
    /// New student's phone.
    pub student_phone: String,
    /// The candidate recurring slot.
    pub slot: TimeSlot,
    /// First day of the booking.
    pub start_date: DateTime<Utc>,
    /// Last day of the booking.
    pub end_date: DateTime<Utc>,
    /// Total fee in whole rupees.
    pub total_fee: i64,
    /// Payment mode for the associated payment record.
    pub payment_mode: String,
}

/// Everything created by one successful admission.
#[derive(Debug, Clone)]
pub struct BookingRecord {
    /// The enrolled student.
    pub student: Student,
    /// The created membership.
    pub membership: Membership,
    /// The associated payment.
    pub payment: Payment,
}

/// Repository for memberships.
#[derive(Debug, Clone)]
pub struct MembershipRepository {
    pool: PgPool,
}

impl MembershipRepository {
    /// Create a new membership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active memberships in a library whose date range intersects
    /// `[window_start, window_end]`.
    pub async fn find_active_intersecting(
        &self,
        library_id: Uuid,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> AppResult<Vec<Membership>> {
        sqlx::query_as::<_, Membership>(
            "SELECT * FROM memberships \
             WHERE library_id = $1 AND status = 'active' \
               AND start_date <= $2 AND end_date >= $3",
        )
        .bind(library_id)
        .bind(window_end)
        .bind(window_start)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load active memberships", e)
        })
    }

    /// Count active memberships in a library.
    pub async fn count_active(&self, library_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM memberships WHERE library_id = $1 AND status = 'active'",
        )
        .bind(library_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count active memberships", e)
        })
    }

    /// Count all memberships ever created in a library.
    pub async fn count_all(&self, library_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM memberships WHERE library_id = $1")
            .bind(library_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count memberships", e)
            })
    }

    /// Admit a booking: create student, membership, and payment atomically.
    ///
    /// The seat row is locked with `SELECT ... FOR UPDATE` and the slot
    /// conflict check re-run inside the lock, closing the check-then-act
    /// race between concurrent admissions. Returns a Conflict error naming
    /// the clashing timing when the seat is taken.
    pub async fn book_seat(&self, params: &BookSeatParams) -> AppResult<BookingRecord> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin booking transaction", e)
        })?;

        // Serialize concurrent admissions per seat.
        sqlx::query("SELECT id FROM seats WHERE id = $1 FOR UPDATE")
            .bind(params.seat_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock seat", e))?;

        let existing = self
            .active_on_seat_intersecting(&mut tx, params.seat_id, params.start_date, params.end_date)
            .await?;

        if let Some(conflict) = find_slot_conflict(&params.slot, &existing) {
            return Err(AppError::conflict(format!(
                "Seat is already booked for {} in the requested period",
                conflict.timing()
            )));
        }

        let student = sqlx::query_as::<_, Student>(
            "INSERT INTO students (library_id, name, phone) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(params.library_id)
        .bind(&params.student_name)
        .bind(&params.student_phone)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create student", e))?;

        let membership = sqlx::query_as::<_, Membership>(
            "INSERT INTO memberships \
             (library_id, student_id, seat_id, start_date, end_date, \
              start_hour, start_minute, end_hour, end_minute, crosses_midnight, \
              status, total_fee) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'active', $11) \
             RETURNING *",
        )
        .bind(params.library_id)
        .bind(student.id)
        .bind(params.seat_id)
        .bind(params.start_date)
        .bind(params.end_date)
        .bind(params.slot.start_hour)
        .bind(params.slot.start_minute)
        .bind(params.slot.end_hour)
        .bind(params.slot.end_minute)
        .bind(params.slot.crosses_midnight)
        .bind(params.total_fee)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create membership", e)
        })?;

        let payment = sqlx::query_as::<_, Payment>(
            "INSERT INTO payments (library_id, membership_id, amount, payment_mode, payment_date) \
             VALUES ($1, $2, $3, $4, NOW()) RETURNING *",
        )
        .bind(params.library_id)
        .bind(membership.id)
        .bind(params.total_fee)
        .bind(&params.payment_mode)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create payment", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit booking", e)
        })?;

        Ok(BookingRecord {
            student,
            membership,
            payment,
        })
    }

    /// Active memberships on one seat intersecting a date window, read
    /// inside the admission transaction.
    async fn active_on_seat_intersecting(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        seat_id: Uuid,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> AppResult<Vec<Membership>> {
        sqlx::query_as::<_, Membership>(
            "SELECT * FROM memberships \
             WHERE seat_id = $1 AND status = 'active' \
               AND start_date <= $2 AND end_date >= $3",
        )
        .bind(seat_id)
        .bind(window_end)
        .bind(window_start)
        .fetch_all(&mut **tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load seat memberships", e)
        })
    }

    /// Active memberships expiring inside `[window_start, window_end]` with
    /// no dedup log row of `notification_type`, joined with the owning
    /// tenant's push-delivery state.
    pub async fn find_expiring_unnotified(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        notification_type: &str,
    ) -> AppResult<Vec<ExpiringMembership>> {
        sqlx::query_as::<_, ExpiringMembership>(
            "SELECT m.id AS membership_id, m.library_id, m.total_fee, m.end_date, \
                    o.expo_push_token AS push_token, o.notifications_enabled \
             FROM memberships m \
             JOIN libraries l ON l.id = m.library_id \
             JOIN library_owners o ON o.id = l.owner_id \
             LEFT JOIN notification_logs nl \
                    ON nl.membership_id = m.id AND nl.notification_type = $3 \
             WHERE m.status = 'active' \
               AND m.end_date >= $1 AND m.end_date <= $2 \
               AND nl.id IS NULL \
             ORDER BY m.library_id, m.end_date",
        )
        .bind(window_start)
        .bind(window_end)
        .bind(notification_type)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to scan expiring memberships", e)
        })
    }

    /// Transition active memberships whose `end_date` has passed to
    /// `expired`. Returns the number of rows swept.
    pub async fn expire_lapsed(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE memberships SET status = 'expired', updated_at = NOW() \
             WHERE status = 'active' AND end_date < $1",
        )
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to sweep lapsed memberships", e)
        })?;
        Ok(result.rows_affected())
    }
}
