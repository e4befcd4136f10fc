//! Cron scheduler for periodic background jobs.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing;

use seatbook_core::config::WorkerConfig;
use seatbook_core::error::AppError;

use crate::executor::JobExecutor;
use crate::jobs::expiry::EXPIRY_REMINDER_JOB;
use crate::jobs::lapse::LAPSE_SWEEP_JOB;

/// Cron-based scheduler driving the job executor
pub struct CronScheduler {
    /// The underlying job scheduler
    scheduler: JobScheduler,
    /// Executor the cron entries dispatch into
    executor: Arc<JobExecutor>,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler
    pub async fn new(executor: Arc<JobExecutor>) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {}", e)))?;

        Ok(Self {
            scheduler,
            executor,
        })
    }

    /// Register all scheduled tasks from worker configuration
    pub async fn register_default_tasks(&self, config: &WorkerConfig) -> Result<(), AppError> {
        self.register_cron_job(EXPIRY_REMINDER_JOB, &config.expiry_cron)
            .await?;
        self.register_cron_job(LAPSE_SWEEP_JOB, &config.lapse_cron)
            .await?;

        tracing::info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {}", e)))?;

        tracing::info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {}", e)))?;

        tracing::info!("Cron scheduler shut down");
        Ok(())
    }

    /// Register one cron entry that dispatches `job_type` on `schedule`
    async fn register_cron_job(&self, job_type: &str, schedule: &str) -> Result<(), AppError> {
        let executor = Arc::clone(&self.executor);
        let dispatch_type = job_type.to_string();

        let job = CronJob::new_async(schedule, move |_uuid, _lock| {
            let executor = Arc::clone(&executor);
            let job_type = dispatch_type.clone();
            Box::pin(async move {
                if let Err(e) = executor.execute(&job_type).await {
                    tracing::error!("Job '{}' failed: {}", job_type, e);
                }
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create '{}' schedule: {}", job_type, e))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add '{}' schedule: {}", job_type, e))
        })?;

        tracing::info!("Registered: {} ({})", job_type, schedule);
        Ok(())
    }
}
