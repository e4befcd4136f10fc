//! Expense entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A tenant bookkeeping expense (rent, electricity, supplies).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Expense {
    /// Unique expense identifier.
    pub id: Uuid,
    /// Owning library.
    pub library_id: Uuid,
    /// Short description.
    pub title: String,
    /// Amount in whole rupees.
    pub amount: i64,
    /// Free-form category label.
    pub category: Option<String>,
    /// When the expense was incurred.
    pub spent_at: DateTime<Utc>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
