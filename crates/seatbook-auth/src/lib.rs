//! Authentication for Seatbook: JWT issuance/validation and Argon2id
//! password hashing.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
