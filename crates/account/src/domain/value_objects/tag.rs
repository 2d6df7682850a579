// crates/account/src/domain/value_objects/tag.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::uuid_identifier;
use unicode_normalization::UnicodeNormalization;

uuid_identifier!(TagId, "tag_id");

/// Natural key of a tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagTitle(String);

impl TagTitle {
    pub const MAX_LEN: usize = 50;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let title = Self(value.into().trim().nfc().collect());
        title.validate()?;
        Ok(title)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for TagTitle {
    fn validate(&self) -> Result<()> {
        let len = self.0.chars().count();
        if len == 0 || len > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "tag_title",
                reason: format!("Tag title must be between 1 and {} characters", Self::MAX_LEN),
            });
        }
        Ok(())
    }
}

impl TryFrom<String> for TagTitle {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<TagTitle> for String {
    fn from(title: TagTitle) -> Self {
        title.0
    }
}

impl std::fmt::Display for TagTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
