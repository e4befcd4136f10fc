//! Background jobs for Seatbook.
//!
//! Jobs are dispatched by type through the [`executor::JobExecutor`];
//! the [`scheduler::CronScheduler`] fires them on configured cron
//! expressions.

pub mod executor;
pub mod jobs;
pub mod scheduler;

pub use executor::{JobExecutionError, JobExecutor, JobHandler};
pub use scheduler::CronScheduler;
