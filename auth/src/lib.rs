//! Authentication utilities library
//!
//! Provides the credential primitives used by the token service:
//! - Password verification (bcrypt, with Argon2 PHC hashes also accepted)
//! - Access token issuance and validation (HS256 JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{PasswordHasher, PasswordMatch, PasswordVerifier};
//!
//! let hash = PasswordHasher::with_cost(4).hash("my_password").unwrap();
//! let outcome = PasswordVerifier::new().verify(hash.as_bytes(), "my_password").unwrap();
//! assert_eq!(outcome, PasswordMatch::Match);
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", "https://example.com");
//! let signed = issuer.issue("admin").unwrap();
//! let claims = issuer.verify(&signed.token).unwrap();
//! assert_eq!(claims.role, "admin");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", "https://example.com");
//! let hash = PasswordHasher::with_cost(4).hash("password123").unwrap();
//!
//! let result = auth.authenticate("password123", hash.as_bytes(), "member").unwrap();
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::AccessClaims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SignedToken;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordMatch;
pub use password::PasswordVerifier;
