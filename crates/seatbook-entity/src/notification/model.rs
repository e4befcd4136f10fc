//! Notification log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Notification type marking a 7-day expiry reminder as sent.
pub const EXPIRY_WITHIN_7_DAYS: &str = "expiry_within_7_days";

/// An append-only record that a notification kind was already sent for a
/// membership. Used as the dedup guard by the expiry batcher; rows are
/// never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NotificationLog {
    /// Unique log identifier.
    pub id: Uuid,
    /// Owning library.
    pub library_id: Uuid,
    /// The membership the notification was about.
    pub membership_id: Uuid,
    /// Notification kind, e.g. [`EXPIRY_WITHIN_7_DAYS`].
    pub notification_type: String,
    /// When the notification was logged.
    pub created_at: DateTime<Utc>,
}
