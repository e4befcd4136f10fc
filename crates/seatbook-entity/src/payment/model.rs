//! Payment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A payment recorded against a membership.
///
/// Created atomically with its membership at admission time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    /// Unique payment identifier.
    pub id: Uuid,
    /// Owning library.
    pub library_id: Uuid,
    /// The membership this payment is for.
    pub membership_id: Uuid,
    /// Amount in whole rupees.
    pub amount: i64,
    /// Payment mode, e.g. `"cash"` or `"upi"`.
    pub payment_mode: String,
    /// When the payment was made.
    pub payment_date: DateTime<Utc>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
