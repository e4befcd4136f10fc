//! Renewal-reminder notifications.
//!
//! The expiry scan finds active memberships ending within the horizon,
//! groups them per tenant, sends one push per tenant, and records dedup log
//! rows so each membership is reminded at most once.

pub mod batch;
pub mod expiry;
pub mod push;
pub mod service;

pub use batch::{TenantBatch, plan_batches, render_message};
pub use expiry::{BatchOutcome, ExpiryNotifier, ReminderLog};
pub use push::ExpoPushSender;
pub use service::NotificationService;
