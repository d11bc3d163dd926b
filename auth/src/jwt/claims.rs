use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// Field names follow RFC 7519 so standard verifiers understand the payload.
/// Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Role of the authenticated user
    pub role: String,

    /// Issued at
    pub iat: i64,

    /// Not before, always equal to `iat`
    pub nbf: i64,

    /// Expiration time
    pub exp: i64,

    /// Audience
    pub aud: String,

    /// Issuer
    pub iss: String,
}

impl AccessClaims {
    /// Build claims valid from `issued_at` for `lifetime`.
    ///
    /// # Arguments
    /// * `role` - Role copied from the user record
    /// * `identifier` - Service identifier used as both issuer and audience
    /// * `issued_at` - Issuance instant
    /// * `lifetime` - Validity window, must be positive
    pub fn new(
        role: impl Into<String>,
        identifier: impl Into<String>,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        let identifier = identifier.into();
        let iat = issued_at.timestamp();

        Self {
            role: role.into(),
            iat,
            nbf: iat,
            exp: iat + lifetime.num_seconds(),
            aud: identifier.clone(),
            iss: identifier,
        }
    }

    /// Expiration instant, `None` if `exp` is out of range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}
