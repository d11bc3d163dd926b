use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use super::claims::AccessClaims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Validity window of every access token.
pub const ACCESS_TOKEN_LIFETIME_HOURS: i64 = 24;

/// A signed access token together with the claims it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedToken {
    pub token: String,
    pub claims: AccessClaims,
}

/// Issues access tokens for a single service identity.
///
/// The identifier is written to both `iss` and `aud`.
pub struct TokenIssuer {
    handler: JwtHandler,
    identifier: String,
    lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], identifier: impl Into<String>) -> Self {
        Self {
            handler: JwtHandler::new(secret),
            identifier: identifier.into(),
            lifetime: Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS),
        }
    }

    /// Issue a token for `role`, valid from now.
    ///
    /// # Errors
    /// * `MissingSecret` - Issuer was built with an empty secret
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, role: &str) -> Result<SignedToken, JwtError> {
        self.issue_at(role, Utc::now())
    }

    /// Issue a token for `role` as if the current time were `now`.
    pub fn issue_at(&self, role: &str, now: DateTime<Utc>) -> Result<SignedToken, JwtError> {
        let claims = AccessClaims::new(role, self.identifier.as_str(), now, self.lifetime);
        let token = self.handler.encode(&claims)?;

        Ok(SignedToken { token, claims })
    }

    /// Verify a token issued for this identity.
    ///
    /// Checks signature, validity window, issuer and audience.
    pub fn verify(&self, token: &str) -> Result<AccessClaims, JwtError> {
        let mut validation = self.handler.validation();
        validation.set_audience(&[self.identifier.as_str()]);
        validation.set_issuer(&[self.identifier.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "aud", "iss"]);

        self.handler.decode(token, &validation)
    }
}
