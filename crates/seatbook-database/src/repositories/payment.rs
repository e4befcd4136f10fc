//! Payment repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use seatbook_core::error::{AppError, ErrorKind};
use seatbook_core::result::AppResult;
use seatbook_entity::payment::Payment;

/// Repository for payments.
///
/// Payments are inserted by the booking transaction in the membership
/// repository; this repository covers the read side.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    /// Create a new payment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all payments for a library, newest first.
    pub async fn find_by_library(&self, library_id: Uuid) -> AppResult<Vec<Payment>> {
        sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE library_id = $1 ORDER BY payment_date DESC",
        )
        .bind(library_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list payments", e))
    }

    /// Total revenue for a library in whole rupees.
    pub async fn sum_by_library(&self, library_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, Option<i64>>(
            "SELECT SUM(amount) FROM payments WHERE library_id = $1",
        )
        .bind(library_id)
        .fetch_one(&self.pool)
        .await
        .map(|sum| sum.unwrap_or(0))
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum payments", e))
    }
}
