//! Renewal-reminder notification configuration.

use serde::{Deserialize, Serialize};

/// Push notification and expiry-scan configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How many days ahead the expiry scan looks.
    #[serde(default = "default_horizon")]
    pub expiry_horizon_days: i64,
    /// Push delivery endpoint (Expo-compatible).
    #[serde(default = "default_push_endpoint")]
    pub push_endpoint: String,
    /// Push request timeout in seconds.
    #[serde(default = "default_push_timeout")]
    pub push_timeout_seconds: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            expiry_horizon_days: default_horizon(),
            push_endpoint: default_push_endpoint(),
            push_timeout_seconds: default_push_timeout(),
        }
    }
}

fn default_horizon() -> i64 {
    7
}

fn default_push_endpoint() -> String {
    "https://exp.host/--/api/v2/push/send".to_string()
}

fn default_push_timeout() -> u64 {
    10
}
