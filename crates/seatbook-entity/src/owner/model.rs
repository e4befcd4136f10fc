//! Library owner entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A tenant account: the owner of a library.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LibraryOwner {
    /// Unique owner identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unique login email.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Registered push-delivery token, if the owner's device opted in.
    pub expo_push_token: Option<String>,
    /// Whether renewal-reminder notifications are enabled.
    pub notifications_enabled: bool,
    /// When the owner registered.
    pub created_at: DateTime<Utc>,
    /// When the owner was last updated.
    pub updated_at: DateTime<Utc>,
}

impl LibraryOwner {
    /// Whether this owner can currently receive push notifications.
    pub fn can_receive_push(&self) -> bool {
        self.notifications_enabled && self.expo_push_token.is_some()
    }
}

/// Data required to register a new owner.
#[derive(Debug, Clone)]
pub struct CreateOwner {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Pre-hashed password.
    pub password_hash: String,
}
