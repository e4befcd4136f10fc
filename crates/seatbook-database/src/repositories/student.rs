//! Student repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use seatbook_core::error::{AppError, ErrorKind};
use seatbook_core::result::AppResult;
use seatbook_entity::student::{Student, StudentRosterRow};

/// Repository for students.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    /// Create a new student repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a student by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find student", e))
    }

    /// Count students enrolled at a library.
    pub async fn count_by_library(&self, library_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students WHERE library_id = $1")
            .bind(library_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count students", e))
    }

    /// The student roster for a library: each non-removed student joined
    /// with their active membership and seat, newest enrollments first.
    pub async fn list_roster(&self, library_id: Uuid) -> AppResult<Vec<StudentRosterRow>> {
        sqlx::query_as::<_, StudentRosterRow>(
            "SELECT s.id AS student_id, s.name, s.phone, s.is_active, \
                    st.seat_number, m.status AS membership_status, \
                    m.end_date AS membership_end_date, \
                    m.start_hour, m.start_minute, m.end_hour, m.end_minute, \
                    m.crosses_midnight \
             FROM students s \
             LEFT JOIN memberships m ON m.student_id = s.id AND m.status = 'active' \
             LEFT JOIN seats st ON st.id = m.seat_id \
             WHERE s.library_id = $1 AND s.is_active = TRUE \
             ORDER BY s.created_at DESC",
        )
        .bind(library_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list roster", e))
    }

    /// Withdraw a student: expire all their active memberships and clear
    /// the `is_active` flag in one transaction.
    ///
    /// Partial application (membership expired but student still active, or
    /// vice versa) is never observable.
    pub async fn withdraw(&self, student_id: Uuid, now: DateTime<Utc>) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin withdrawal", e)
        })?;

        sqlx::query(
            "UPDATE memberships SET status = 'expired', end_date = $2, updated_at = NOW() \
             WHERE student_id = $1 AND status = 'active'",
        )
        .bind(student_id)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to expire memberships", e)
        })?;

        sqlx::query("UPDATE students SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
            .bind(student_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to deactivate student", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit withdrawal", e)
        })?;

        Ok(())
    }
}
