//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Background job worker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the worker is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron schedule for the membership expiry notification job.
    #[serde(default = "default_expiry_cron")]
    pub expiry_cron: String,
    /// Cron schedule for the membership lapse sweep job.
    #[serde(default = "default_lapse_cron")]
    pub lapse_cron: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            expiry_cron: default_expiry_cron(),
            lapse_cron: default_lapse_cron(),
        }
    }
}

fn default_true() -> bool {
    true
}

// Daily at 20:00.
fn default_expiry_cron() -> String {
    "0 0 20 * * *".to_string()
}

// Daily at 00:30.
fn default_lapse_cron() -> String {
    "0 30 0 * * *".to_string()
}
