//! The Seatbook HTTP API.
//!
//! Routes are mounted under `/api`; every authenticated route resolves the
//! acting owner from a Bearer token and enforces tenancy in the service
//! layer.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
