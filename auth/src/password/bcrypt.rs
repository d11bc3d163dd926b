use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordVerifier as _;
use argon2::Argon2;

use super::errors::PasswordError;

/// Outcome of comparing a submitted password against a stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordMatch {
    Match,
    Mismatch,
}

/// Password hashing implementation.
///
/// Produces bcrypt hashes; the salt and cost factor travel inside the hash string.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher using the bcrypt default cost.
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit bcrypt cost (4..=31).
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password securely.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Modular crypt string (`$2b$<cost>$<salt><digest>`)
    ///
    /// # Errors
    /// * `HashingFailed` - Cost out of range or hashing failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Verifies submitted passwords against stored hashes.
///
/// Accepts bcrypt hashes (`$2a$`, `$2b$`, `$2x$`, `$2y$`) and Argon2 PHC strings.
/// Both paths compare digests in constant time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordVerifier;

impl PasswordVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `stored_hash` - Hash bytes as kept by the credential store
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// `Match` or `Mismatch`
    ///
    /// # Errors
    /// * `MalformedHash` - Stored hash is not a recognised, well-formed hash
    /// * `VerificationFailed` - The hashing backend failed
    pub fn verify(&self, stored_hash: &[u8], password: &str) -> Result<PasswordMatch, PasswordError> {
        let stored_hash = std::str::from_utf8(stored_hash)
            .map_err(|_| PasswordError::MalformedHash("hash is not valid UTF-8".to_string()))?;

        if stored_hash.starts_with("$argon2") {
            Self::verify_argon2(stored_hash, password)
        } else if stored_hash.starts_with("$2") {
            Self::verify_bcrypt(stored_hash, password)
        } else {
            Err(PasswordError::MalformedHash(
                "unrecognised hash scheme".to_string(),
            ))
        }
    }

    fn verify_bcrypt(stored_hash: &str, password: &str) -> Result<PasswordMatch, PasswordError> {
        // verify only fails on hashes it cannot parse
        match bcrypt::verify(password, stored_hash) {
            Ok(true) => Ok(PasswordMatch::Match),
            Ok(false) => Ok(PasswordMatch::Mismatch),
            Err(e) => Err(PasswordError::MalformedHash(e.to_string())),
        }
    }

    fn verify_argon2(stored_hash: &str, password: &str) -> Result<PasswordMatch, PasswordError> {
        let parsed_hash = PasswordHash::new(stored_hash)
            .map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(PasswordMatch::Match),
            Err(argon2::password_hash::Error::Password) => Ok(PasswordMatch::Mismatch),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use argon2::password_hash::rand_core::OsRng;
    use argon2::password_hash::PasswordHasher as _;
    use argon2::password_hash::SaltString;

    use super::*;

    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::with_cost(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = fast_hasher();
        let verifier = PasswordVerifier::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");
        assert!(hash.starts_with("$2b$04$"));

        assert_eq!(
            verifier.verify(hash.as_bytes(), password).unwrap(),
            PasswordMatch::Match
        );
        assert_eq!(
            verifier.verify(hash.as_bytes(), "wrong_password").unwrap(),
            PasswordMatch::Mismatch
        );
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = fast_hasher();
        let first = hasher.hash("same_password").unwrap();
        let second = hasher.hash("same_password").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_is_repeatable() {
        let hash = fast_hasher().hash("longenough1").unwrap();
        let verifier = PasswordVerifier::new();

        for _ in 0..3 {
            assert_eq!(
                verifier.verify(hash.as_bytes(), "longenough1").unwrap(),
                PasswordMatch::Match
            );
        }
    }

    #[test]
    fn test_verify_go_style_2a_hash() {
        // $2a$ hashes are what most other bcrypt implementations emit.
        let hash = fast_hasher().hash("password123").unwrap().replacen("$2b$", "$2a$", 1);

        assert_eq!(
            PasswordVerifier::new()
                .verify(hash.as_bytes(), "password123")
                .unwrap(),
            PasswordMatch::Match
        );
    }

    #[test]
    fn test_verify_invalid_hash() {
        let verifier = PasswordVerifier::new();

        let result = verifier.verify(b"invalid_hash", "password");
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }

    #[test]
    fn test_verify_truncated_bcrypt_hash() {
        let verifier = PasswordVerifier::new();

        let result = verifier.verify(b"$2b$04$tooshort", "password");
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }

    #[test]
    fn test_verify_non_utf8_hash() {
        let verifier = PasswordVerifier::new();

        let result = verifier.verify(&[0x24, 0x32, 0xff, 0xfe], "password");
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }

    #[test]
    fn test_verify_plaintext_is_not_a_hash() {
        let verifier = PasswordVerifier::new();

        let result = verifier.verify(b"password123", "password123");
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_argon2_hash() {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(b"argon_password", &salt)
            .unwrap()
            .to_string();
        let verifier = PasswordVerifier::new();

        assert_eq!(
            verifier.verify(hash.as_bytes(), "argon_password").unwrap(),
            PasswordMatch::Match
        );
        assert_eq!(
            verifier.verify(hash.as_bytes(), "other_password").unwrap(),
            PasswordMatch::Mismatch
        );
    }

    #[test]
    fn test_verify_malformed_argon2_hash() {
        let verifier = PasswordVerifier::new();

        let result = verifier.verify(b"$argon2id$v=abc$m=1$s*lt$h*sh", "password");
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }
}
