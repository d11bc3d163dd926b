use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::credentials::errors::AuthError;
use crate::domain::credentials::models::AccessToken;
use crate::domain::credentials::models::CredentialSubmission;
use crate::domain::credentials::models::Credentials;
use crate::domain::credentials::ports::AuthServicePort;
use crate::domain::credentials::ports::UserRepository;

/// Domain service implementation for authentication.
///
/// Runs validate, lookup, verify and issue in that order, stopping at the
/// first failure. Every external call is attempted exactly once.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    conceal_unknown_users: bool,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password verifier and token issuer
    ///
    /// # Returns
    /// Configured service instance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
            conceal_unknown_users: false,
        }
    }

    /// Report unknown emails as `InvalidCredentials` instead of `UserNotFound`.
    ///
    /// Off by default. Turning it on stops the outcome from revealing which
    /// emails are registered.
    pub fn with_conceal_unknown_users(mut self, conceal: bool) -> Self {
        self.conceal_unknown_users = conceal;
        self
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn authenticate(
        &self,
        submission: CredentialSubmission,
    ) -> Result<AccessToken, AuthError> {
        let Credentials { email, password } = Credentials::validate(submission).map_err(|e| {
            tracing::info!(error = %e, "Rejected credential submission");
            AuthError::from(e)
        })?;

        let user = match self.repository.find_by_email(&email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::info!(email = %email, "User not found");
                return Err(if self.conceal_unknown_users {
                    AuthError::InvalidCredentials
                } else {
                    AuthError::UserNotFound
                });
            }
            Err(e) => {
                tracing::error!(email = %email, error = %e, "Failed to look up user");
                return Err(e);
            }
        };

        // Hash comparison is deliberately slow; keep it off the async workers.
        // The password moves into the closure and is wiped when it returns.
        let authenticator = Arc::clone(&self.authenticator);
        let role = user.role;
        let password_hash = user.password_hash;
        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(password.expose_secret(), &password_hash, &role)
        })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Authentication task failed");
            AuthError::Unknown(e.to_string())
        })?;

        match outcome {
            Ok(result) => {
                tracing::info!(
                    email = %email,
                    role = %result.claims.role,
                    expires_at = ?result.claims.expires_at(),
                    "Access token issued"
                );
                Ok(AccessToken {
                    token: result.access_token,
                    claims: result.claims,
                })
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::info!(email = %email, "Invalid credentials");
                Err(AuthError::InvalidCredentials)
            }
            Err(AuthenticationError::PasswordError(e)) => {
                tracing::error!(email = %email, error = %e, "Failed to compare passwords");
                Err(AuthError::Password(e))
            }
            Err(AuthenticationError::JwtError(e)) => {
                tracing::error!(error = %e, "Failed to sign token");
                Err(AuthError::Signing(e))
            }
        }
    }
}
