//! Push delivery abstraction.

use async_trait::async_trait;

use crate::error::AppError;

/// Delivers one push notification to a tenant's registered device token.
///
/// Implementations are expected to treat any non-success response from the
/// provider as an error; the caller decides whether the failure is retried.
#[async_trait]
pub trait PushSender: Send + Sync + std::fmt::Debug {
    /// Send a single notification. One call per tenant group.
    async fn send(&self, token: &str, title: &str, body: &str) -> Result<(), AppError>;
}
