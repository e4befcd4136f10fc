//! Expense handlers — record, list, remove.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use seatbook_entity::expense::Expense;
use seatbook_service::expense::RecordExpenseRequest;

use crate::dto::request::{CreateExpenseRequest, validated};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthOwner;
use crate::state::AppState;

/// POST /api/expenses
pub async fn record(
    State(state): State<AppState>,
    auth: AuthOwner,
    Json(req): Json<CreateExpenseRequest>,
) -> Result<Json<ApiResponse<Expense>>, ApiError> {
    let req = validated(req)?;

    let expense = state
        .expense_service
        .record(
            &auth,
            RecordExpenseRequest {
                library_id: req.library_id,
                title: req.title,
                amount: req.amount,
                category: req.category,
                spent_at: req.spent_at,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(expense)))
}

/// GET /api/libraries/{id}/expenses
pub async fn list(
    State(state): State<AppState>,
    auth: AuthOwner,
    Path(library_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Expense>>>, ApiError> {
    let expenses = state.expense_service.list(&auth, library_id).await?;
    Ok(Json(ApiResponse::ok(expenses)))
}

/// DELETE /api/expenses/{id}
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthOwner,
    Path(expense_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.expense_service.remove(&auth, expense_id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Expense removed".to_string(),
    })))
}
