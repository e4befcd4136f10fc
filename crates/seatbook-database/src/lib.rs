//! # seatbook-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all SeatBook entities.
//!
//! The booking admission transaction — the storage-level backstop for the
//! per-seat no-overlap invariant — lives in [`repositories::membership`].

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
