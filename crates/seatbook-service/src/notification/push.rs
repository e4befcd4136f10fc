//! Expo-compatible push delivery.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use seatbook_core::config::NotificationConfig;
use seatbook_core::error::AppError;
use seatbook_core::traits::PushSender;

/// Sends push notifications through an Expo-compatible endpoint.
#[derive(Debug, Clone)]
pub struct ExpoPushSender {
    /// HTTP client with the configured timeout.
    client: reqwest::Client,
    /// Push endpoint URL.
    endpoint: String,
}

/// Request body for the push endpoint.
#[derive(Debug, Serialize)]
struct PushMessage<'a> {
    to: &'a str,
    title: &'a str,
    body: &'a str,
    sound: &'a str,
}

impl ExpoPushSender {
    /// Creates a sender from notification configuration.
    pub fn new(config: &NotificationConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.push_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    seatbook_core::error::ErrorKind::Configuration,
                    "Failed to build push HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            client,
            endpoint: config.push_endpoint.clone(),
        })
    }
}

#[async_trait]
impl PushSender for ExpoPushSender {
    async fn send(&self, token: &str, title: &str, body: &str) -> Result<(), AppError> {
        let message = PushMessage {
            to: token,
            title,
            body,
            sound: "default",
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    seatbook_core::error::ErrorKind::Delivery,
                    "Push request failed",
                    e,
                )
            })?;

        if !response.status().is_success() {
            return Err(AppError::delivery(format!(
                "Push endpoint returned {}",
                response.status()
            )));
        }

        debug!(endpoint = %self.endpoint, "push delivered");
        Ok(())
    }
}
