//! Job handler implementations.

pub mod expiry;
pub mod lapse;

pub use expiry::ExpiryReminderHandler;
pub use lapse::MembershipLapseHandler;
