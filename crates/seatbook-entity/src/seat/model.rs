//! Seat entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A physical seat in a library.
///
/// Seats are provisioned in bulk when a library is created and are never
/// deleted in normal operation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Seat {
    /// Unique seat identifier.
    pub id: Uuid,
    /// Owning library.
    pub library_id: Uuid,
    /// Human-facing seat number, unique within the library.
    pub seat_number: String,
    /// Whether the seat has an attached locker.
    pub has_locker: bool,
    /// When the seat was created.
    pub created_at: DateTime<Utc>,
}
