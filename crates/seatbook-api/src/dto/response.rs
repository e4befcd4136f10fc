//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use seatbook_entity::membership::Membership;
use seatbook_entity::owner::LibraryOwner;
use seatbook_entity::payment::Payment;
use seatbook_entity::student::Student;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Owner summary for responses.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerResponse {
    /// Owner ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Whether renewal reminders are enabled.
    pub notifications_enabled: bool,
    /// When the owner registered.
    pub created_at: DateTime<Utc>,
}

impl From<LibraryOwner> for OwnerResponse {
    fn from(owner: LibraryOwner) -> Self {
        Self {
            id: owner.id,
            name: owner.name,
            email: owner.email,
            phone: owner.phone,
            notifications_enabled: owner.notifications_enabled,
            created_at: owner.created_at,
        }
    }
}

/// Login and registration response.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Access token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// Owner info.
    pub owner: OwnerResponse,
}

/// Everything created by one admission.
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    /// The enrolled student.
    pub student: Student,
    /// The created membership.
    pub membership: Membership,
    /// The admission payment.
    pub payment: Payment,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
