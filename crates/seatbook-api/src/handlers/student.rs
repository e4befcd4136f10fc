//! Student handlers — admission, roster, withdrawal.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use seatbook_service::booking::AdmitBookingRequest;
use seatbook_service::student::RosterEntry;

use crate::dto::request::{CreateBookingRequest, validated};
use crate::dto::response::{ApiResponse, BookingResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthOwner;
use crate::state::AppState;

/// POST /api/students
pub async fn admit(
    State(state): State<AppState>,
    auth: AuthOwner,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, ApiError> {
    let req = validated(req)?;

    let record = state
        .booking_service
        .admit(
            &auth,
            AdmitBookingRequest {
                library_id: req.library_id,
                seat_number: req.seat_number,
                student_name: req.name,
                student_phone: req.phone,
                timing: req.timing,
                days: req.booked_for,
                total_fee: req.amount,
                payment_mode: req.payment_method,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(BookingResponse {
        student: record.student,
        membership: record.membership,
        payment: record.payment,
    })))
}

/// GET /api/libraries/{id}/students
pub async fn roster(
    State(state): State<AppState>,
    auth: AuthOwner,
    Path(library_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<RosterEntry>>>, ApiError> {
    let entries = state.student_service.roster(&auth, library_id).await?;
    Ok(Json(ApiResponse::ok(entries)))
}

/// DELETE /api/students/{id}
pub async fn withdraw(
    State(state): State<AppState>,
    auth: AuthOwner,
    Path(student_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.booking_service.withdraw(&auth, student_id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Student withdrawn".to_string(),
    })))
}
