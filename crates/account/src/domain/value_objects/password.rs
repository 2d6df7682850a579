// crates/account/src/domain/value_objects/password.rs

use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Plaintext password as submitted. Only lives long enough to be hashed
/// or checked, and never prints its content.
#[derive(Clone, PartialEq, Eq)]
pub struct RawPassword(String);

impl RawPassword {
    pub const MIN_LEN: usize = 8;
    pub const MAX_LEN: usize = 50;

    /// No trimming: whitespace is part of the secret
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let password = Self(value.into());
        password.validate()?;
        Ok(password)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for RawPassword {
    fn validate(&self) -> Result<()> {
        let len = self.0.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(DomainError::Validation {
                field: "password",
                reason: format!(
                    "Password must be between {} and {} characters",
                    Self::MIN_LEN,
                    Self::MAX_LEN
                ),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RawPassword(<redacted>)")
    }
}

/// Encoded credential (PHC string). Opaque to the domain.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}
