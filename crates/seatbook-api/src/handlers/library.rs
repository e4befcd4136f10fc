//! Library handlers — create, list, overview, availability.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use seatbook_entity::library::Library;
use seatbook_service::booking::{AvailabilityReport, AvailabilityRequest};
use seatbook_service::library::{self, LibraryOverview};

use crate::dto::request::{AvailabilityQuery, CreateLibraryRequest, validated};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthOwner;
use crate::state::AppState;

/// POST /api/libraries
pub async fn create(
    State(state): State<AppState>,
    auth: AuthOwner,
    Json(req): Json<CreateLibraryRequest>,
) -> Result<Json<ApiResponse<Library>>, ApiError> {
    let req = validated(req)?;

    let library = state
        .library_service
        .create(
            &auth,
            library::CreateLibraryRequest {
                name: req.name,
                address: req.address,
                seat_count: req.seat_count,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(library)))
}

/// GET /api/libraries
pub async fn list(
    State(state): State<AppState>,
    auth: AuthOwner,
) -> Result<Json<ApiResponse<Vec<Library>>>, ApiError> {
    let libraries = state.library_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(libraries)))
}

/// GET /api/libraries/{id}/overview
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthOwner,
    Path(library_id): Path<Uuid>,
) -> Result<Json<ApiResponse<LibraryOverview>>, ApiError> {
    let overview = state.library_service.overview(&auth, library_id).await?;
    Ok(Json(ApiResponse::ok(overview)))
}

/// GET /api/libraries/{id}/availability
pub async fn availability(
    State(state): State<AppState>,
    auth: AuthOwner,
    Path(library_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<AvailabilityReport>>, ApiError> {
    let report = state
        .booking_service
        .find_available_seats(
            &auth,
            AvailabilityRequest {
                library_id,
                timing: format!("{} - {}", query.start, query.end),
                days: query.booked_for,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(report)))
}
