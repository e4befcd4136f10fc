//! Financial and occupancy dashboard.

pub mod service;

pub use service::{DashboardService, DashboardSummary};
