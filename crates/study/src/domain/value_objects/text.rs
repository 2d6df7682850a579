// crates/study/src/domain/value_objects/text.rs

use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};

/// Trimmed, non-blank text capped at `$max` characters.
macro_rules! bounded_text {
    ($(#[$doc:meta])* $name:ident, $field:literal, $max:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const MAX_LEN: usize = $max;

            pub fn try_new(value: impl Into<String>) -> Result<Self> {
                let trimmed = value.into().trim().to_string();
                let len = trimmed.chars().count();
                if len == 0 || len > Self::MAX_LEN {
                    return Err(DomainError::Validation {
                        field: $field,
                        reason: format!("Must be between 1 and {} characters", Self::MAX_LEN),
                    });
                }
                Ok(Self(trimmed))
            }

            pub fn from_raw(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

bounded_text!(StudyTitle, "title", 50);
bounded_text!(
    /// Shown on study cards
    ShortDescription,
    "short_description",
    100
);
bounded_text!(EventTitle, "title", 50);

/// Long form study presentation. Any length, never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullDescription(String);

impl FullDescription {
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation {
                field: "full_description",
                reason: "Full description cannot be blank".into(),
            });
        }
        Ok(Self(value))
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
