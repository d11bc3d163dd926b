use async_trait::async_trait;

use crate::domain::credentials::errors::AuthError;
use crate::domain::credentials::models::AccessToken;
use crate::domain::credentials::models::CredentialSubmission;
use crate::domain::credentials::models::EmailAddress;
use crate::domain::credentials::models::User;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange an email/password pair for a signed access token.
    ///
    /// # Arguments
    /// * `submission` - Raw credentials as received from the caller
    ///
    /// # Returns
    /// Signed access token and its claims
    ///
    /// # Errors
    /// * `RejectedInput` - Email or password failed validation
    /// * `UserNotFound` - No user with this email
    /// * `InvalidCredentials` - Password does not match
    /// * `DatabaseError` / `Password` / `Signing` / `Unknown` - Internal failure
    async fn authenticate(&self, submission: CredentialSubmission)
        -> Result<AccessToken, AuthError>;
}

/// Read access to stored credential records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// Called once per authentication attempt; implementations must not retry.
    ///
    /// # Arguments
    /// * `email` - Validated email address
    ///
    /// # Returns
    /// Optional user record (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError>;
}
