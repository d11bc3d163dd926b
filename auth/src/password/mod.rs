pub mod bcrypt;
pub mod errors;

pub use self::bcrypt::PasswordHasher;
pub use self::bcrypt::PasswordMatch;
pub use self::bcrypt::PasswordVerifier;
pub use errors::PasswordError;
