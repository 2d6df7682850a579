// crates/study/src/domain/value_objects/study_path.rs

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use unicode_normalization::UnicodeNormalization;

static PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ㄱ-ㅎ가-힣a-z0-9_-]{2,20}$").unwrap());

/// URL segment of a study (`/study/{path}`). Unique across studies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudyPath(String);

impl StudyPath {
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let normalized: String = value.into().trim().nfc().collect();

        let path = Self(normalized);
        path.validate()?;

        Ok(path)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for StudyPath {
    fn validate(&self) -> Result<()> {
        if !PATH_REGEX.is_match(&self.0) {
            return Err(DomainError::Validation {
                field: "path",
                reason: "Path must be 2 to 20 lowercase letters, Hangul, digits, '_' or '-'".into(),
            });
        }
        Ok(())
    }
}

impl TryFrom<String> for StudyPath {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<StudyPath> for String {
    fn from(path: StudyPath) -> Self {
        path.0
    }
}

impl std::fmt::Display for StudyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
