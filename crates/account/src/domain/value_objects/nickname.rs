// crates/account/src/domain/value_objects/nickname.rs

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use unicode_normalization::UnicodeNormalization;

// Hangul jamo and syllables, ASCII letters, digits, underscore, hyphen
static NICKNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ㄱ-ㅎ가-힣a-zA-Z0-9_-]{3,20}$").unwrap());

/// Public handle of an account. Unique across all accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nickname(String);

impl Nickname {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 20;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let normalized: String = value.into().trim().nfc().collect();

        let nickname = Self(normalized);
        nickname.validate()?;

        Ok(nickname)
    }

    /// Rebuild from storage, no validation
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Nickname {
    fn validate(&self) -> Result<()> {
        if !NICKNAME_REGEX.is_match(&self.0) {
            return Err(DomainError::Validation {
                field: "nickname",
                reason: format!(
                    "Nickname must be {} to {} letters, digits, '_' or '-'",
                    Self::MIN_LEN,
                    Self::MAX_LEN
                ),
            });
        }
        Ok(())
    }
}

impl TryFrom<String> for Nickname {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Nickname> for String {
    fn from(nickname: Nickname) -> Self {
        nickname.0
    }
}

impl std::fmt::Display for Nickname {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
