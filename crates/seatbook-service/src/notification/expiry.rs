//! The expiry notification run.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use seatbook_core::error::AppError;
use seatbook_core::traits::{Clock, PushSender};
use seatbook_database::repositories::{MembershipRepository, NotificationLogRepository};
use seatbook_entity::notification::EXPIRY_WITHIN_7_DAYS;

use crate::notification::batch::{TenantBatch, plan_batches, render_message};

/// Per-run accounting: tenant pushes that succeeded and failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct BatchOutcome {
    /// Tenant pushes delivered.
    pub success_count: usize,
    /// Tenant pushes that failed.
    pub failure_count: usize,
}

/// Sink for the dedup rows written after a successful delivery.
#[async_trait]
pub trait ReminderLog: Send + Sync + std::fmt::Debug {
    /// Record one notification as sent for a membership.
    async fn record(
        &self,
        library_id: Uuid,
        membership_id: Uuid,
        notification_type: &str,
    ) -> Result<(), AppError>;
}

#[async_trait]
impl ReminderLog for NotificationLogRepository {
    async fn record(
        &self,
        library_id: Uuid,
        membership_id: Uuid,
        notification_type: &str,
    ) -> Result<(), AppError> {
        self.append(library_id, membership_id, notification_type)
            .await?;
        Ok(())
    }
}

/// Scans for expiring memberships and sends one reminder per tenant.
///
/// Dedup is enforced by the scan query's anti-join on the notification log:
/// a membership gets a log row only after its tenant's push succeeds, so
/// failed tenants are retried on the next run without re-notifying
/// successful ones.
#[derive(Debug, Clone)]
pub struct ExpiryNotifier {
    /// Membership repository.
    membership_repo: Arc<MembershipRepository>,
    /// Dedup log sink.
    log: Arc<dyn ReminderLog>,
    /// Push delivery.
    push: Arc<dyn PushSender>,
    /// Time source.
    clock: Arc<dyn Clock>,
    /// How many days ahead the scan looks.
    horizon_days: i64,
}

impl ExpiryNotifier {
    /// Creates a new expiry notifier.
    pub fn new(
        membership_repo: Arc<MembershipRepository>,
        log: Arc<dyn ReminderLog>,
        push: Arc<dyn PushSender>,
        clock: Arc<dyn Clock>,
        horizon_days: i64,
    ) -> Self {
        Self {
            membership_repo,
            log,
            push,
            clock,
            horizon_days,
        }
    }

    /// One full run: scan, group, deliver, log.
    pub async fn process(&self) -> Result<BatchOutcome, AppError> {
        let now = self.clock.now();
        let horizon = now + Duration::days(self.horizon_days);

        let rows = self
            .membership_repo
            .find_expiring_unnotified(now, horizon, EXPIRY_WITHIN_7_DAYS)
            .await?;

        let batches = plan_batches(&rows);
        info!(
            expiring = rows.len(),
            tenants = batches.len(),
            "expiry scan complete"
        );

        Ok(deliver(
            self.push.as_ref(),
            self.log.as_ref(),
            &batches,
            self.horizon_days,
        )
        .await)
    }
}

/// Delivers planned batches, one push per tenant, logging dedup rows for
/// delivered memberships. A failed tenant never stops the rest.
async fn deliver(
    push: &dyn PushSender,
    log: &dyn ReminderLog,
    batches: &[TenantBatch],
    horizon_days: i64,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for batch in batches {
        let (title, body) = render_message(batch, horizon_days);

        match push.send(&batch.push_token, &title, &body).await {
            Ok(()) => {
                outcome.success_count += 1;
                log_delivered(log, batch).await;
            }
            Err(e) => {
                outcome.failure_count += 1;
                warn!(
                    library_id = %batch.library_id,
                    error = %e,
                    "reminder push failed"
                );
            }
        }
    }

    info!(
        success = outcome.success_count,
        failed = outcome.failure_count,
        "reminder delivery finished"
    );
    outcome
}

/// Appends one dedup log row per delivered membership.
async fn log_delivered(log: &dyn ReminderLog, batch: &TenantBatch) {
    for membership_id in &batch.membership_ids {
        if let Err(e) = log
            .record(batch.library_id, *membership_id, EXPIRY_WITHIN_7_DAYS)
            .await
        {
            // The membership will be re-scanned next run; the log row
            // insert is retried then.
            warn!(
                membership_id = %membership_id,
                error = %e,
                "failed to record notification log"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug)]
    struct FlakyPush {
        fail_token: String,
    }

    #[async_trait]
    impl PushSender for FlakyPush {
        async fn send(&self, token: &str, _title: &str, _body: &str) -> Result<(), AppError> {
            if token == self.fail_token {
                Err(AppError::delivery("provider rejected the push"))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Debug, Default)]
    struct RecordingLog {
        rows: Mutex<Vec<(Uuid, Uuid)>>,
    }

    #[async_trait]
    impl ReminderLog for RecordingLog {
        async fn record(
            &self,
            library_id: Uuid,
            membership_id: Uuid,
            _notification_type: &str,
        ) -> Result<(), AppError> {
            self.rows.lock().unwrap().push((library_id, membership_id));
            Ok(())
        }
    }

    #[derive(Debug)]
    struct BrokenLog;

    #[async_trait]
    impl ReminderLog for BrokenLog {
        async fn record(&self, _: Uuid, _: Uuid, _: &str) -> Result<(), AppError> {
            Err(AppError::internal("log insert failed"))
        }
    }

    fn batch(library_id: Uuid, token: &str, membership_ids: Vec<Uuid>) -> TenantBatch {
        TenantBatch {
            library_id,
            push_token: token.to_string(),
            count: membership_ids.len(),
            renewal_amount: 1000,
            membership_ids,
        }
    }

    #[tokio::test]
    async fn test_one_failed_tenant_does_not_stop_the_rest() {
        let good_lib = Uuid::new_v4();
        let bad_lib = Uuid::new_v4();
        let good_member = Uuid::new_v4();
        let bad_member = Uuid::new_v4();

        let push = FlakyPush {
            fail_token: "bad-token".to_string(),
        };
        let log = RecordingLog::default();
        let batches = vec![
            batch(bad_lib, "bad-token", vec![bad_member]),
            batch(good_lib, "good-token", vec![good_member]),
        ];

        let outcome = deliver(&push, &log, &batches, 7).await;

        assert_eq!(
            outcome,
            BatchOutcome {
                success_count: 1,
                failure_count: 1,
            }
        );

        // Only the delivered tenant's memberships get dedup rows; the
        // failed one stays unlogged so the next run retries it.
        let rows = log.rows.lock().unwrap();
        assert_eq!(rows.as_slice(), &[(good_lib, good_member)]);
    }

    #[tokio::test]
    async fn test_log_rows_written_per_delivered_membership() {
        let lib = Uuid::new_v4();
        let members = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];

        let push = FlakyPush {
            fail_token: "unused".to_string(),
        };
        let log = RecordingLog::default();
        let batches = vec![batch(lib, "token", members.clone())];

        let outcome = deliver(&push, &log, &batches, 7).await;

        assert_eq!(outcome.success_count, 1);
        let rows = log.rows.lock().unwrap();
        assert_eq!(rows.len(), 3);
        assert!(members.iter().all(|m| rows.contains(&(lib, *m))));
    }

    #[tokio::test]
    async fn test_log_write_failure_keeps_delivery_accounting() {
        let push = FlakyPush {
            fail_token: "unused".to_string(),
        };
        let batches = vec![batch(Uuid::new_v4(), "token", vec![Uuid::new_v4()])];

        let outcome = deliver(&push, &BrokenLog, &batches, 7).await;

        assert_eq!(outcome.success_count, 1);
        assert_eq!(outcome.failure_count, 0);
    }
}
