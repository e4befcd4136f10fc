//! The renewal-reminder job.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing;

use seatbook_service::notification::ExpiryNotifier;

use crate::executor::{JobExecutionError, JobHandler};

/// Job type for the expiry reminder run.
pub const EXPIRY_REMINDER_JOB: &str = "membership_expiry_reminder";

/// Runs the expiry scan and sends one reminder push per tenant.
#[derive(Debug)]
pub struct ExpiryReminderHandler {
    /// The notifier doing the scan and delivery.
    notifier: Arc<ExpiryNotifier>,
}

impl ExpiryReminderHandler {
    /// Create a new expiry reminder handler.
    pub fn new(notifier: Arc<ExpiryNotifier>) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl JobHandler for ExpiryReminderHandler {
    fn job_type(&self) -> &str {
        EXPIRY_REMINDER_JOB
    }

    async fn execute(&self) -> Result<Option<Value>, JobExecutionError> {
        let outcome = self
            .notifier
            .process()
            .await
            .map_err(|e| JobExecutionError::Transient(format!("Expiry reminder run failed: {e}")))?;

        tracing::info!(
            "Expiry reminder run: {} sent, {} failed",
            outcome.success_count,
            outcome.failure_count
        );

        Ok(Some(serde_json::json!({
            "task": EXPIRY_REMINDER_JOB,
            "success_count": outcome.success_count,
            "failure_count": outcome.failure_count,
        })))
    }
}
