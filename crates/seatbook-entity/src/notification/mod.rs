//! Notification log entity.

pub mod model;

pub use model::{EXPIRY_WITHIN_7_DAYS, NotificationLog};
