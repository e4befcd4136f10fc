//! Expense tracking.

pub mod service;

pub use service::{ExpenseService, RecordExpenseRequest};
