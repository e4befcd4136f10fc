//! Notification handlers — token registration, preferences, manual run.

use axum::Json;
use axum::extract::State;

use seatbook_service::notification::BatchOutcome;

use crate::dto::request::{PreferencesRequest, RegisterTokenRequest, validated};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthOwner;
use crate::state::AppState;

/// POST /api/notifications/token
pub async fn register_token(
    State(state): State<AppState>,
    auth: AuthOwner,
    Json(req): Json<RegisterTokenRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let req = validated(req)?;
    state
        .notification_service
        .register_token(&auth, &req.token)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Push token registered".to_string(),
    })))
}

/// PUT /api/notifications/preferences
pub async fn set_preferences(
    State(state): State<AppState>,
    auth: AuthOwner,
    Json(req): Json<PreferencesRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .notification_service
        .set_preferences(&auth, req.enabled)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Preferences updated".to_string(),
    })))
}

/// POST /api/notifications/process
///
/// Manually triggers the expiry reminder run that the scheduler fires
/// daily. Requires authentication; the run itself spans all tenants.
pub async fn process(
    State(state): State<AppState>,
    _auth: AuthOwner,
) -> Result<Json<ApiResponse<BatchOutcome>>, ApiError> {
    let outcome = state.expiry_notifier.process().await?;
    Ok(Json(ApiResponse::ok(outcome)))
}
