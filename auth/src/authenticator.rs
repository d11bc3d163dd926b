use crate::jwt::AccessClaims;
use crate::jwt::JwtError;
use crate::jwt::SignedToken;
use crate::jwt::TokenIssuer;
use crate::password::PasswordError;
use crate::password::PasswordMatch;
use crate::password::PasswordVerifier;

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds the signing secret for the life of the process; it is immutable
/// once built and safe to share behind an `Arc`.
pub struct Authenticator {
    password_verifier: PasswordVerifier,
    token_issuer: TokenIssuer,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,

    /// Claims embedded in `access_token`
    pub claims: AccessClaims,
}

impl From<SignedToken> for AuthenticationResult {
    fn from(signed: SignedToken) -> Self {
        Self {
            access_token: signed.token,
            claims: signed.claims,
        }
    }
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `identifier` - Service identifier written to `iss` and `aud`
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(jwt_secret: &[u8], identifier: impl Into<String>) -> Self {
        Self {
            password_verifier: PasswordVerifier::new(),
            token_issuer: TokenIssuer::new(jwt_secret, identifier),
        }
    }

    /// Verify credentials and generate JWT token.
    ///
    /// Runs one hash comparison and, on a match, one signing operation.
    /// The comparison is CPU heavy; async callers should run this on a
    /// blocking thread.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `role` - Role to embed in the token
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed or verification failed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &[u8],
        role: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        match self.verify_password(stored_hash, password)? {
            PasswordMatch::Match => {}
            PasswordMatch::Mismatch => return Err(AuthenticationError::InvalidCredentials),
        }

        let signed = self.issue_token(role)?;

        Ok(signed.into())
    }

    /// Compare a password against a stored hash without issuing a token.
    pub fn verify_password(
        &self,
        stored_hash: &[u8],
        password: &str,
    ) -> Result<PasswordMatch, PasswordError> {
        self.password_verifier.verify(stored_hash, password)
    }

    /// Generate a token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, role: &str) -> Result<SignedToken, JwtError> {
        self.token_issuer.issue(role)
    }

    /// Validate and decode a token issued by this authenticator.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<AccessClaims, JwtError> {
        self.token_issuer.verify(token)
    }
}
