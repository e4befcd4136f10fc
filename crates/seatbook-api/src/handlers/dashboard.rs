//! Dashboard handler.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use seatbook_service::dashboard::DashboardSummary;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthOwner;
use crate::state::AppState;

/// GET /api/libraries/{id}/dashboard
pub async fn summary(
    State(state): State<AppState>,
    auth: AuthOwner,
    Path(library_id): Path<Uuid>,
) -> Result<Json<ApiResponse<DashboardSummary>>, ApiError> {
    let summary = state.dashboard_service.summary(&auth, library_id).await?;
    Ok(Json(ApiResponse::ok(summary)))
}
