use thiserror::Error;

/// Error for credential submission validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid password: length must be between {min} and {max} bytes")]
    InvalidPassword { min: usize, max: usize },
}

/// Transport-agnostic outcome category of a failed authentication.
///
/// This is the only failure information that crosses the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// Caller's input was malformed; resubmitting fixed input may succeed
    RejectedInput,
    /// No identity with this email
    NotFound,
    /// Identity exists but the credential is wrong
    Unauthorized,
    /// Store, hashing or signing malfunction
    InternalFailure,
}

/// Top-level error for authentication operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Rejected input: {0}")]
    RejectedInput(#[from] CredentialsError),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Password verification error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token signing error: {0}")]
    Signing(#[from] auth::JwtError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AuthError {
    pub fn category(&self) -> FailureCategory {
        match self {
            AuthError::RejectedInput(_) => FailureCategory::RejectedInput,
            AuthError::UserNotFound => FailureCategory::NotFound,
            AuthError::InvalidCredentials => FailureCategory::Unauthorized,
            AuthError::DatabaseError(_)
            | AuthError::Password(_)
            | AuthError::Signing(_)
            | AuthError::Unknown(_) => FailureCategory::InternalFailure,
        }
    }
}
