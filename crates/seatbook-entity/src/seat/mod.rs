//! Seat entity.

pub mod model;

pub use model::Seat;
