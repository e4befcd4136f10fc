//! Registration, login, and profile lookup for library owners.

use std::sync::Arc;

use tracing::info;

use seatbook_auth::jwt::{IssuedToken, JwtEncoder};
use seatbook_auth::password::PasswordHasher;
use seatbook_core::error::AppError;
use seatbook_database::repositories::OwnerRepository;
use seatbook_entity::owner::{CreateOwner, LibraryOwner};

use crate::context::RequestContext;

/// Request to register a new owner account.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegisterOwnerRequest {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

/// Login credentials.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginCredentials {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Manages owner accounts and token issuance.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Owner repository.
    owner_repo: Arc<OwnerRepository>,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Token encoder.
    encoder: JwtEncoder,
    /// Minimum accepted password length.
    password_min_length: usize,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        owner_repo: Arc<OwnerRepository>,
        encoder: JwtEncoder,
        password_min_length: usize,
    ) -> Self {
        Self {
            owner_repo,
            hasher: PasswordHasher::new(),
            encoder,
            password_min_length,
        }
    }

    /// Registers a new owner and issues their first access token.
    pub async fn register(
        &self,
        req: RegisterOwnerRequest,
    ) -> Result<(LibraryOwner, IssuedToken), AppError> {
        if req.password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        if self.owner_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("An account with this email already exists"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let owner = self
            .owner_repo
            .create(&CreateOwner {
                name: req.name,
                email: req.email,
                phone: req.phone,
                password_hash,
            })
            .await?;

        info!(owner_id = %owner.id, "owner registered");

        let token = self.encoder.issue(owner.id, &owner.email)?;
        Ok((owner, token))
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown email and wrong password produce the same error so the
    /// response does not reveal which accounts exist.
    pub async fn login(
        &self,
        credentials: LoginCredentials,
    ) -> Result<(LibraryOwner, IssuedToken), AppError> {
        let owner = self
            .owner_repo
            .find_by_email(&credentials.email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        let verified = self
            .hasher
            .verify_password(&credentials.password, &owner.password_hash)?;
        if !verified {
            return Err(AppError::authentication("Invalid email or password"));
        }

        info!(owner_id = %owner.id, "owner logged in");

        let token = self.encoder.issue(owner.id, &owner.email)?;
        Ok((owner, token))
    }

    /// Returns the authenticated owner's profile.
    pub async fn profile(&self, ctx: &RequestContext) -> Result<LibraryOwner, AppError> {
        self.owner_repo
            .find_by_id(ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Owner not found"))
    }
}
