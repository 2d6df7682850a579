//! Form validators.
//!
//! Each validator turns raw form input into a list of field errors; an empty
//! list means the matching mutation may run. Storage lookups (uniqueness)
//! are the only reason a validator can fail with an error of its own.

mod codes;
mod nickname_validator;
mod password_validator;
mod preference_validator;
mod profile_validator;
mod sign_up_validator;

pub use codes::*;
pub use nickname_validator::validate_nickname;
pub use password_validator::validate_password_change;
pub use preference_validator::{validate_tag_title, validate_zone_name};
pub use profile_validator::validate_profile;
pub use sign_up_validator::validate_sign_up;
