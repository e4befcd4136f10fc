//! Business logic for Seatbook.
//!
//! Services orchestrate repositories and enforce tenancy: every operation
//! resolves resources through the authenticated owner before touching them.

pub mod auth;
pub mod booking;
pub mod context;
pub mod dashboard;
pub mod expense;
pub mod library;
pub mod notification;
pub mod student;

pub use context::RequestContext;
