//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use seatbook_core::error::AppError;

/// Validate a request body, folding field errors into one message.
pub fn validated<T: Validate>(req: T) -> Result<T, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    Ok(req)
}

/// Owner registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Library creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLibraryRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Library name is required"))]
    pub name: String,
    /// Street address.
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    /// How many seats to provision.
    #[validate(range(min = 1, message = "Seat count must be at least 1"))]
    pub seat_count: u32,
}

/// Query parameters for the availability endpoint.
///
/// `?start=HH:MM&end=HH:MM&booked_for=N` — the date window is computed
/// server-side as `[today, today + booked_for days]`.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityQuery {
    /// Daily slot start as `"HH:MM"`.
    pub start: String,
    /// Daily slot end as `"HH:MM"`.
    pub end: String,
    /// How many days the prospective booking runs.
    pub booked_for: i64,
}

/// Booking admission request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// The library to book in.
    pub library_id: Uuid,
    /// New student's name.
    #[validate(length(min = 1, message = "Student name is required"))]
    pub name: String,
    /// New student's phone.
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    /// Human-facing seat number.
    #[validate(length(min = 1, message = "Seat number is required"))]
    pub seat_number: String,
    /// Booked timing as `"HH:MM - HH:MM"`.
    #[validate(length(min = 1, message = "Timing is required"))]
    pub timing: String,
    /// How many days the booking runs, starting today.
    #[validate(range(min = 1, message = "Booking must run for at least 1 day"))]
    pub booked_for: i64,
    /// Total fee in whole rupees.
    pub amount: i64,
    /// Payment mode for the admission payment.
    #[validate(length(min = 1, message = "Payment method is required"))]
    pub payment_method: String,
}

/// Push token registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterTokenRequest {
    /// The device push token.
    #[validate(length(min = 1, message = "Push token is required"))]
    pub token: String,
}

/// Notification preference request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesRequest {
    /// Whether renewal reminders are enabled.
    pub enabled: bool,
}

/// Expense creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    /// The library the expense belongs to.
    pub library_id: Uuid,
    /// What was paid for.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Amount in whole rupees.
    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount: i64,
    /// Optional category label.
    pub category: Option<String>,
    /// When the money was spent; defaults to now.
    pub spent_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_availability_query_takes_times_and_day_count() {
        let q: AvailabilityQuery = serde_json::from_value(json!({
            "start": "09:00",
            "end": "12:00",
            "booked_for": 30,
        }))
        .unwrap();

        assert_eq!(q.start, "09:00");
        assert_eq!(q.end, "12:00");
        assert_eq!(q.booked_for, 30);
    }

    #[test]
    fn test_booking_request_rejects_zero_days() {
        let req = CreateBookingRequest {
            library_id: Uuid::new_v4(),
            name: "Asha".to_string(),
            phone: "9000000000".to_string(),
            seat_number: "12".to_string(),
            timing: "09:00 - 12:00".to_string(),
            booked_for: 0,
            amount: 1500,
            payment_method: "cash".to_string(),
        };

        assert!(validated(req).is_err());
    }
}
