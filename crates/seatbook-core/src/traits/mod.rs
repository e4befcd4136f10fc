//! Abstractions the core consumes from the outside world.

pub mod clock;
pub mod push;

pub use clock::{Clock, FixedClock, SystemClock};
pub use push::PushSender;
