use std::fmt;
use std::sync::LazyLock;

use auth::AccessClaims;
use chrono::DateTime;
use chrono::Utc;
use regex::Regex;
use secrecy::ExposeSecret;
use secrecy::SecretString;

use crate::domain::credentials::errors::CredentialsError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Stored credential record.
///
/// Owned by the persistence layer; authentication only reads it.
#[derive(Clone)]
pub struct User {
    pub email: String,
    pub password_hash: Vec<u8>,
    pub role: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("role", &self.role)
            .field("active", &self.active)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Email address type
///
/// Accepts RFC 5322 style addresses: a local part of atext characters and dots,
/// and a domain of dot-separated labels (1-63 alphanumeric or hyphen
/// characters, no leading or trailing hyphen).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidEmail` - Empty or not matching the address pattern
    pub fn new(email: String) -> Result<Self, CredentialsError> {
        if email.is_empty() || !EMAIL_PATTERN.is_match(&email) {
            return Err(CredentialsError::InvalidEmail);
        }

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Submitted plaintext password.
///
/// The length bounds are in bytes: bcrypt ignores input past 72 bytes.
/// The buffer is wiped when the value is dropped.
#[derive(Debug)]
pub struct Password(SecretString);

impl Password {
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 72;

    /// Create a new validated password.
    ///
    /// # Errors
    /// * `InvalidPassword` - Empty, shorter than 8 or longer than 72 bytes
    pub fn new(password: SecretString) -> Result<Self, CredentialsError> {
        let length = password.expose_secret().len();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(CredentialsError::InvalidPassword {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(password))
    }

    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Raw email/password pair as received from a caller.
#[derive(Debug)]
pub struct CredentialSubmission {
    pub email: String,
    pub password: SecretString,
}

impl CredentialSubmission {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::new(password.into()),
        }
    }
}

/// Credentials that passed syntactic validation.
#[derive(Debug)]
pub struct Credentials {
    pub email: EmailAddress,
    pub password: Password,
}

impl Credentials {
    /// Validate a submission before any I/O happens.
    ///
    /// The email is checked first, then the password.
    pub fn validate(submission: CredentialSubmission) -> Result<Self, CredentialsError> {
        let email = EmailAddress::new(submission.email)?;
        let password = Password::new(submission.password)?;

        Ok(Self { email, password })
    }
}

/// Access token handed back after a successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    pub claims: AccessClaims,
}
