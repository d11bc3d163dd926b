pub mod claims;
pub mod errors;
pub mod handler;
pub mod issuer;

pub use claims::AccessClaims;
pub use errors::JwtError;
pub use handler::JwtHandler;
pub use issuer::SignedToken;
pub use issuer::TokenIssuer;
pub use issuer::ACCESS_TOKEN_LIFETIME_HOURS;
