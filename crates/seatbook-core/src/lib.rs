//! # seatbook-core
//!
//! Core crate for SeatBook. Contains configuration schemas, the unified
//! error system, and the injectable clock/push-delivery traits that the
//! rest of the workspace builds on.
//!
//! This crate has **no** internal dependencies on other SeatBook crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
