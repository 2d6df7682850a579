// crates/account/src/domain/value_objects/profile.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use unicode_normalization::UnicodeNormalization;

/// Trim then NFC. Length bounds apply to the result, so surrounding
/// whitespace never counts.
fn normalize(value: impl Into<String>) -> String {
    value.into().trim().nfc().collect()
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Short self introduction shown on the profile page.
/// At most 35 characters, counted after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bio(String);

impl Bio {
    pub const MAX_LEN: usize = 35;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let bio = Self(normalize(value));
        bio.validate()?;
        Ok(bio)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Bio {
    fn validate(&self) -> Result<()> {
        if self.0.chars().count() > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "bio",
                reason: format!("Bio cannot exceed {} characters", Self::MAX_LEN),
            });
        }
        Ok(())
    }
}

/// Free text profile line (url, occupation, location).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileText(String);

impl ProfileText {
    pub const MAX_LEN: usize = 50;

    pub fn try_new(field: &'static str, value: impl Into<String>) -> Result<Self> {
        let text = Self(normalize(value));
        if text.0.chars().count() > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field,
                reason: format!("{} cannot exceed {} characters", field, Self::MAX_LEN),
            });
        }
        Ok(text)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// All editable profile fields, replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub bio: Option<Bio>,
    pub url: Option<ProfileText>,
    pub occupation: Option<ProfileText>,
    pub location: Option<ProfileText>,
}

impl Profile {
    /// Blank inputs clear the field
    pub fn try_from_input(
        bio: Option<&str>,
        url: Option<&str>,
        occupation: Option<&str>,
        location: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            bio: present(bio).map(Bio::try_new).transpose()?,
            url: present(url).map(|v| ProfileText::try_new("url", v)).transpose()?,
            occupation: present(occupation)
                .map(|v| ProfileText::try_new("occupation", v))
                .transpose()?,
            location: present(location)
                .map(|v| ProfileText::try_new("location", v))
                .transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
