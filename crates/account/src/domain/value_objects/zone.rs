// crates/account/src/domain/value_objects/zone.rs

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::uuid_identifier;
use unicode_normalization::UnicodeNormalization;

uuid_identifier!(ZoneId, "zone_id");

macro_rules! zone_part {
    ($name:ident, $field:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const MAX_LEN: usize = 50;

            pub fn try_new(value: impl Into<String>) -> Result<Self> {
                let normalized: String = value.into().trim().nfc().collect();
                let len = normalized.chars().count();
                if len == 0 || len > Self::MAX_LEN {
                    return Err(DomainError::Validation {
                        field: $field,
                        reason: format!("Must be between 1 and {} characters", Self::MAX_LEN),
                    });
                }
                Ok(Self(normalized))
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

zone_part!(City, "city");
zone_part!(LocalNameOfCity, "local_name_of_city");
zone_part!(Province, "province");

/// Human readable zone key: `City(LocalName)/Province`.
///
/// This is both how zones are displayed and how zone forms submit them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneLabel {
    pub city: City,
    pub local_name_of_city: LocalNameOfCity,
    pub province: Province,
}

impl ZoneLabel {
    pub fn new(city: City, local_name_of_city: LocalNameOfCity, province: Province) -> Self {
        Self {
            city,
            local_name_of_city,
            province,
        }
    }

    fn malformed(raw: &str) -> DomainError {
        DomainError::Validation {
            field: "zone_name",
            reason: format!("'{}' is not of the form City(LocalName)/Province", raw),
        }
    }
}

impl FromStr for ZoneLabel {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let (city, rest) = trimmed.split_once('(').ok_or_else(|| Self::malformed(raw))?;
        let (local, province) = rest.split_once(")/").ok_or_else(|| Self::malformed(raw))?;

        Ok(Self {
            city: City::try_new(city)?,
            local_name_of_city: LocalNameOfCity::try_new(local)?,
            province: Province::try_new(province)?,
        })
    }
}

impl std::fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({})/{}",
            self.city, self.local_name_of_city, self.province
        )
    }
}
