//! Push token registration and preference management.

use std::sync::Arc;

use tracing::info;

use seatbook_core::error::AppError;
use seatbook_database::repositories::OwnerRepository;

use crate::context::RequestContext;

/// Manages the owner's push-delivery state.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Owner repository.
    owner_repo: Arc<OwnerRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(owner_repo: Arc<OwnerRepository>) -> Self {
        Self { owner_repo }
    }

    /// Stores or replaces the owner's push token.
    pub async fn register_token(&self, ctx: &RequestContext, token: &str) -> Result<(), AppError> {
        if token.trim().is_empty() {
            return Err(AppError::validation("Push token is required"));
        }

        self.owner_repo.set_push_token(ctx.owner_id, token.trim()).await?;
        info!(owner_id = %ctx.owner_id, "push token registered");
        Ok(())
    }

    /// Enables or disables renewal reminders for the owner.
    pub async fn set_preferences(
        &self,
        ctx: &RequestContext,
        enabled: bool,
    ) -> Result<(), AppError> {
        self.owner_repo
            .set_notifications_enabled(ctx.owner_id, enabled)
            .await?;
        info!(owner_id = %ctx.owner_id, enabled, "notification preference updated");
        Ok(())
    }
}
