//! Repository implementations for all SeatBook entities.

pub mod expense;
pub mod library;
pub mod membership;
pub mod notification_log;
pub mod owner;
pub mod payment;
pub mod seat;
pub mod student;

pub use expense::ExpenseRepository;
pub use library::LibraryRepository;
pub use membership::MembershipRepository;
pub use notification_log::NotificationLogRepository;
pub use owner::OwnerRepository;
pub use payment::PaymentRepository;
pub use seat::SeatRepository;
pub use student::StudentRepository;
