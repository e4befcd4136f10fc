//! Auth handlers — register, login, me.

use axum::Json;
use axum::extract::State;

use seatbook_service::auth::{LoginCredentials, RegisterOwnerRequest};

use crate::dto::request::{LoginRequest, RegisterRequest, validated};
use crate::dto::response::{ApiResponse, LoginResponse, OwnerResponse};
use crate::error::ApiError;
use crate::extractors::AuthOwner;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let req = validated(req)?;

    let (owner, issued) = state
        .auth_service
        .register(RegisterOwnerRequest {
            name: req.name,
            email: req.email,
            phone: req.phone,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        owner: owner.into(),
    })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let req = validated(req)?;

    let (owner, issued) = state
        .auth_service
        .login(LoginCredentials {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        owner: owner.into(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthOwner,
) -> Result<Json<ApiResponse<OwnerResponse>>, ApiError> {
    let owner = state.auth_service.profile(&auth).await?;
    Ok(Json(ApiResponse::ok(owner.into())))
}
