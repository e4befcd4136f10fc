//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use seatbook_core::config::AuthConfig;
use seatbook_core::error::AppError;

use super::claims::Claims;

/// Creates signed access tokens for library owners.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in hours.
    ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

/// A freshly issued token with its expiry.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IssuedToken {
    /// The signed token string.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_hours: config.jwt_ttl_hours as i64,
        }
    }

    /// Issues an access token for the given owner.
    pub fn issue(&self, owner_id: Uuid, email: &str) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::hours(self.ttl_hours);

        let claims = Claims {
            sub: owner_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken {
            token,
            expires_at: exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::decoder::JwtDecoder;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-key".to_string(),
            jwt_ttl_hours: 24,
            password_min_length: 8,
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);

        let owner_id = Uuid::new_v4();
        let issued = encoder.issue(owner_id, "owner@example.com").unwrap();
        let claims = decoder.decode(&issued.token).unwrap();

        assert_eq!(claims.sub, owner_id);
        assert_eq!(claims.email, "owner@example.com");
        assert_eq!(claims.expires_at().timestamp(), issued.expires_at.timestamp());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let encoder = JwtEncoder::new(&config());
        let issued = encoder.issue(Uuid::new_v4(), "owner@example.com").unwrap();

        let other = AuthConfig {
            jwt_secret: "different-secret".to_string(),
            ..config()
        };
        let decoder = JwtDecoder::new(&other);
        assert!(decoder.decode(&issued.token).is_err());
    }
}
