//! Seat repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use seatbook_core::error::{AppError, ErrorKind};
use seatbook_core::result::AppResult;
use seatbook_entity::seat::Seat;

/// Repository for seats.
#[derive(Debug, Clone)]
pub struct SeatRepository {
    pool: PgPool,
}

impl SeatRepository {
    /// Create a new seat repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all seats in a library, ordered by seat number.
    pub async fn find_by_library(&self, library_id: Uuid) -> AppResult<Vec<Seat>> {
        sqlx::query_as::<_, Seat>(
            "SELECT * FROM seats WHERE library_id = $1 ORDER BY length(seat_number), seat_number",
        )
        .bind(library_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list seats", e))
    }

    /// Resolve a human-facing seat number within a library.
    pub async fn find_by_number(
        &self,
        library_id: Uuid,
        seat_number: &str,
    ) -> AppResult<Option<Seat>> {
        sqlx::query_as::<_, Seat>(
            "SELECT * FROM seats WHERE library_id = $1 AND seat_number = $2",
        )
        .bind(library_id)
        .bind(seat_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find seat", e))
    }

    /// Count seats in a library.
    pub async fn count_by_library(&self, library_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM seats WHERE library_id = $1")
            .bind(library_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count seats", e))
    }
}
