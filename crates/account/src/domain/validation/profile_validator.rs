// crates/account/src/domain/validation/profile_validator.rs

use shared_kernel::errors::FieldErrors;

use crate::domain::validation::TOO_LONG;
use crate::domain::value_objects::{Bio, ProfileText};

pub fn validate_profile(
    bio: Option<&str>,
    url: Option<&str>,
    occupation: Option<&str>,
    location: Option<&str>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(bio) = bio {
        errors.capture("bio", TOO_LONG, Bio::try_new(bio));
    }

    for (field, value) in [("url", url), ("occupation", occupation), ("location", location)] {
        if let Some(value) = value {
            errors.capture(field, TOO_LONG, ProfileText::try_new(field, value));
        }
    }

    errors
}
