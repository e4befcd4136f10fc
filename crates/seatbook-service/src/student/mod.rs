//! Student roster queries.

pub mod service;

pub use service::{RosterEntry, StudentService};
