//! The membership lapse sweep job.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing;

use seatbook_core::traits::Clock;
use seatbook_database::repositories::MembershipRepository;

use crate::executor::{JobExecutionError, JobHandler};

/// Job type for the lapse sweep.
pub const LAPSE_SWEEP_JOB: &str = "membership_lapse_sweep";

/// Transitions active memberships whose end date has passed to expired.
#[derive(Debug)]
pub struct MembershipLapseHandler {
    /// Membership repository.
    membership_repo: Arc<MembershipRepository>,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl MembershipLapseHandler {
    /// Create a new lapse sweep handler.
    pub fn new(membership_repo: Arc<MembershipRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            membership_repo,
            clock,
        }
    }
}

#[async_trait]
impl JobHandler for MembershipLapseHandler {
    fn job_type(&self) -> &str {
        LAPSE_SWEEP_JOB
    }

    async fn execute(&self) -> Result<Option<Value>, JobExecutionError> {
        let swept = self
            .membership_repo
            .expire_lapsed(self.clock.now())
            .await
            .map_err(|e| JobExecutionError::Transient(format!("Lapse sweep failed: {e}")))?;

        tracing::info!("Lapse sweep: {} memberships expired", swept);

        Ok(Some(serde_json::json!({
            "task": LAPSE_SWEEP_JOB,
            "expired": swept,
        })))
    }
}
