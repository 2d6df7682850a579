// crates/account/src/infrastructure/security/argon2_password_encoder.rs

use argon2::Argon2;
use argon2::password_hash::{self, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng};
use shared_kernel::errors::{DomainError, Result};

use crate::domain::ports::PasswordEncoder;
use crate::domain::value_objects::{PasswordHash, RawPassword};

/// Argon2id with a random salt per hash, stored in PHC string format.
#[derive(Default)]
pub struct Argon2PasswordEncoder {
    hasher: Argon2<'static>,
}

impl Argon2PasswordEncoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordEncoder for Argon2PasswordEncoder {
    fn encode(&self, raw: &RawPassword) -> Result<PasswordHash> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .hasher
            .hash_password(raw.as_str().as_bytes(), &salt)
            .map_err(|e| DomainError::Infrastructure(format!("Password hashing failed: {}", e)))?;

        Ok(PasswordHash::from_raw(hash.to_string()))
    }

    fn matches(&self, raw: &str, hash: &PasswordHash) -> bool {
        let Ok(parsed) = password_hash::PasswordHash::new(hash.as_str()) else {
            tracing::warn!("Stored password hash is not a valid PHC string");
            return false;
        };
        self.hasher.verify_password(raw.as_bytes(), &parsed).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(value: &str) -> RawPassword {
        RawPassword::try_new(value).unwrap()
    }

    #[test]
    fn test_hash_verifies_only_the_original_password() {
        let encoder = Argon2PasswordEncoder::new();
        let hash = encoder.encode(&raw("12345678")).unwrap();

        assert!(hash.as_str().starts_with("$argon2id$"));
        assert!(encoder.matches("12345678", &hash));
        assert!(!encoder.matches("87654321", &hash));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let encoder = Argon2PasswordEncoder::new();
        let a = encoder.encode(&raw("12345678")).unwrap();
        let b = encoder.encode(&raw("12345678")).unwrap();
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        let encoder = Argon2PasswordEncoder::new();
        assert!(!encoder.matches("12345678", &PasswordHash::from_raw("plain-text")));
    }
}
