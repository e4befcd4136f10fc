//! Owner registration and login.

pub mod service;

pub use service::{AuthService, LoginCredentials, RegisterOwnerRequest};
