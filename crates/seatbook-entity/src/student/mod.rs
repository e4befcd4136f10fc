//! Student entity.

pub mod model;

pub use model::{Student, StudentRosterRow};
