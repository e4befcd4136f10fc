//! Library entity.

pub mod model;
pub mod status;

pub use model::Library;
pub use status::LibraryStatus;
