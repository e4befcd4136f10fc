//! Library repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use seatbook_core::error::{AppError, ErrorKind};
use seatbook_core::result::AppResult;
use seatbook_entity::library::{Library, LibraryStatus};

/// Parameters for provisioning a new library.
#[derive(Debug, Clone)]
pub struct CreateLibraryParams {
    /// Owning tenant.
    pub owner_id: Uuid,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Subscription window start.
    pub subscription_start: DateTime<Utc>,
    /// Subscription window end.
    pub subscription_end: DateTime<Utc>,
    /// Initial subscription state.
    pub status: LibraryStatus,
    /// How many seats to provision, numbered from 1.
    pub seat_count: u32,
}

/// Repository for libraries.
#[derive(Debug, Clone)]
pub struct LibraryRepository {
    pool: PgPool,
}

impl LibraryRepository {
    /// Create a new library repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a library by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Library>> {
        sqlx::query_as::<_, Library>("SELECT * FROM libraries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find library", e))
    }

    /// Find a library by ID, restricted to the given owner.
    pub async fn find_owned(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Library>> {
        sqlx::query_as::<_, Library>("SELECT * FROM libraries WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find owned library", e)
            })
    }

    /// List all libraries belonging to an owner, oldest first.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Library>> {
        sqlx::query_as::<_, Library>(
            "SELECT * FROM libraries WHERE owner_id = $1 ORDER BY created_at ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list libraries", e))
    }

    /// Count libraries belonging to an owner.
    pub async fn count_by_owner(&self, owner_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM libraries WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count libraries", e))
    }

    /// Provision a library and its seats in one transaction.
    ///
    /// Seats are numbered `"1"` through `"{seat_count}"`; either the library
    /// and all its seats are created, or nothing is.
    pub async fn create_with_seats(&self, params: &CreateLibraryParams) -> AppResult<Library> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let library = sqlx::query_as::<_, Library>(
            "INSERT INTO libraries \
             (owner_id, name, address, subscription_start, subscription_end, status) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(params.owner_id)
        .bind(&params.name)
        .bind(&params.address)
        .bind(params.subscription_start)
        .bind(params.subscription_end)
        .bind(params.status)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create library", e))?;

        for n in 1..=params.seat_count {
            sqlx::query("INSERT INTO seats (library_id, seat_number, has_locker) VALUES ($1, $2, FALSE)")
                .bind(library.id)
                .bind(n.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to provision seats", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit library creation", e)
        })?;

        Ok(library)
    }
}
