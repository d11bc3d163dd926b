use thiserror::Error;

/// Error type for password operations.
///
/// A wrong password is not an error: it is reported as
/// [`PasswordMatch::Mismatch`](super::PasswordMatch::Mismatch).
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Malformed password hash: {0}")]
    MalformedHash(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
