//! Seat availability and booking admission.

pub mod availability;
pub mod service;

pub use availability::booked_seat_ids;
pub use service::{
    AdmitBookingRequest, AvailabilityReport, AvailabilityRequest, BookingService,
};
