//! Library provisioning and overview.

pub mod service;

pub use service::{CreateLibraryRequest, LibraryOverview, LibraryService};
