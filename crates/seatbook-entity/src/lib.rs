//! # seatbook-entity
//!
//! Domain models for SeatBook: tenants (library owners), libraries, seats,
//! students, memberships with their recurring time slots, payments,
//! expenses, and notification logs.
//!
//! The time-slot overlap predicate — the core of seat availability and
//! booking admission — lives in [`membership::slot`].

pub mod expense;
pub mod library;
pub mod membership;
pub mod notification;
pub mod owner;
pub mod payment;
pub mod seat;
pub mod student;
