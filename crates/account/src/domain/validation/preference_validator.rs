// crates/account/src/domain/validation/preference_validator.rs

use shared_kernel::errors::FieldErrors;

use crate::domain::validation::INVALID_VALUE;
use crate::domain::value_objects::{TagTitle, ZoneLabel};

pub fn validate_tag_title(raw: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.capture("tag_title", INVALID_VALUE, TagTitle::try_new(raw));
    errors
}

pub fn validate_zone_name(raw: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.capture("zone_name", INVALID_VALUE, raw.parse::<ZoneLabel>());
    errors
}
