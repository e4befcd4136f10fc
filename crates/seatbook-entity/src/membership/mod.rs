//! Membership entity: one student's booking of one seat for a date range
//! with a recurring daily time slot.

pub mod model;
pub mod slot;
pub mod status;

pub use model::{ExpiringMembership, Membership, find_slot_conflict};
pub use slot::TimeSlot;
pub use status::MembershipStatus;
