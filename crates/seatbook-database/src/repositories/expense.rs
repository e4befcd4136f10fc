//! Expense repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use seatbook_core::error::{AppError, ErrorKind};
use seatbook_core::result::AppResult;
use seatbook_entity::expense::Expense;

/// Repository for expenses.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    /// Create a new expense repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record an expense.
    pub async fn create(
        &self,
        library_id: Uuid,
        title: &str,
        amount: i64,
        category: Option<&str>,
        spent_at: DateTime<Utc>,
    ) -> AppResult<Expense> {
        sqlx::query_as::<_, Expense>(
            "INSERT INTO expenses (library_id, title, amount, category, spent_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(library_id)
        .bind(title)
        .bind(amount)
        .bind(category)
        .bind(spent_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create expense", e))
    }

    /// Find an expense by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Expense>> {
        sqlx::query_as::<_, Expense>("SELECT * FROM expenses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find expense", e))
    }

    /// List expenses for a library, newest first.
    pub async fn find_by_library(&self, library_id: Uuid) -> AppResult<Vec<Expense>> {
        sqlx::query_as::<_, Expense>(
            "SELECT * FROM expenses WHERE library_id = $1 ORDER BY spent_at DESC",
        )
        .bind(library_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list expenses", e))
    }

    /// Delete an expense within a library. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid, library_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1 AND library_id = $2")
            .bind(id)
            .bind(library_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete expense", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Total expenses for a library in whole rupees.
    pub async fn sum_by_library(&self, library_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, Option<i64>>(
            "SELECT SUM(amount) FROM expenses WHERE library_id = $1",
        )
        .bind(library_id)
        .fetch_one(&self.pool)
        .await
        .map(|sum| sum.unwrap_or(0))
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum expenses", e))
    }
}
