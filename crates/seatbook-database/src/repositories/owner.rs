//! Library owner repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use seatbook_core::error::{AppError, ErrorKind};
use seatbook_core::result::AppResult;
use seatbook_entity::owner::{CreateOwner, LibraryOwner};

/// Repository for tenant (library owner) accounts.
#[derive(Debug, Clone)]
pub struct OwnerRepository {
    pool: PgPool,
}

impl OwnerRepository {
    /// Create a new owner repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an owner by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<LibraryOwner>> {
        sqlx::query_as::<_, LibraryOwner>("SELECT * FROM library_owners WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find owner", e))
    }

    /// Find an owner by login email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<LibraryOwner>> {
        sqlx::query_as::<_, LibraryOwner>("SELECT * FROM library_owners WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find owner by email", e)
            })
    }

    /// Register a new owner.
    pub async fn create(&self, owner: &CreateOwner) -> AppResult<LibraryOwner> {
        sqlx::query_as::<_, LibraryOwner>(
            "INSERT INTO library_owners (name, email, phone, password_hash) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&owner.name)
        .bind(&owner.email)
        .bind(&owner.phone)
        .bind(&owner.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create owner", e))
    }

    /// Store or replace the owner's push-delivery token.
    pub async fn set_push_token(&self, id: Uuid, token: &str) -> AppResult<()> {
        sqlx::query(
            "UPDATE library_owners SET expo_push_token = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set push token", e))?;
        Ok(())
    }

    /// Enable or disable renewal-reminder notifications for the owner.
    pub async fn set_notifications_enabled(&self, id: Uuid, enabled: bool) -> AppResult<()> {
        sqlx::query(
            "UPDATE library_owners SET notifications_enabled = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(enabled)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update preferences", e)
        })?;
        Ok(())
    }
}
