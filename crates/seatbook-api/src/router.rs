//! Route definitions for the Seatbook HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(library_routes())
        .merge(student_routes())
        .merge(notification_routes())
        .merge(expense_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Library provisioning, overview, availability, dashboard
fn library_routes() -> Router<AppState> {
    Router::new()
        .route("/libraries", post(handlers::library::create))
        .route("/libraries", get(handlers::library::list))
        .route(
            "/libraries/{id}/overview",
            get(handlers::library::overview),
        )
        .route(
            "/libraries/{id}/availability",
            get(handlers::library::availability),
        )
        .route(
            "/libraries/{id}/dashboard",
            get(handlers::dashboard::summary),
        )
}

/// Booking admission, roster, withdrawal
fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/students", post(handlers::student::admit))
        .route("/libraries/{id}/students", get(handlers::student::roster))
        .route("/students/{id}", delete(handlers::student::withdraw))
}

/// Push token, preferences, manual reminder run
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications/token",
            post(handlers::notification::register_token),
        )
        .route(
            "/notifications/preferences",
            put(handlers::notification::set_preferences),
        )
        .route(
            "/notifications/process",
            post(handlers::notification::process),
        )
}

/// Expense tracking
fn expense_routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", post(handlers::expense::record))
        .route("/libraries/{id}/expenses", get(handlers::expense::list))
        .route("/expenses/{id}", delete(handlers::expense::remove))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
