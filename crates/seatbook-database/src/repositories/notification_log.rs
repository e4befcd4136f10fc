//! Notification log repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use seatbook_core::error::{AppError, ErrorKind};
use seatbook_core::result::AppResult;
use seatbook_entity::notification::NotificationLog;

/// Repository for the append-only notification log.
#[derive(Debug, Clone)]
pub struct NotificationLogRepository {
    pool: PgPool,
}

impl NotificationLogRepository {
    /// Create a new notification log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one log row marking `notification_type` as sent for a
    /// membership. The unique constraint on (membership, type) makes a
    /// duplicate append fail rather than double-log.
    pub async fn append(
        &self,
        library_id: Uuid,
        membership_id: Uuid,
        notification_type: &str,
    ) -> AppResult<NotificationLog> {
        sqlx::query_as::<_, NotificationLog>(
            "INSERT INTO notification_logs (library_id, membership_id, notification_type) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(library_id)
        .bind(membership_id)
        .bind(notification_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to append notification log", e)
        })
    }
}
