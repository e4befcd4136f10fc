//! HTTP handlers by domain.

pub mod auth;
pub mod dashboard;
pub mod expense;
pub mod health;
pub mod library;
pub mod notification;
pub mod student;
