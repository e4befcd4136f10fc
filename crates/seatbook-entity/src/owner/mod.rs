//! Library owner (tenant) entity.

pub mod model;

pub use model::{CreateOwner, LibraryOwner};
