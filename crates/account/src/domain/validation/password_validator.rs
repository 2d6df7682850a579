// crates/account/src/domain/validation/password_validator.rs

use shared_kernel::errors::FieldErrors;

use crate::domain::validation::{INVALID_PASSWORD, WRONG_VALUE};
use crate::domain::value_objects::RawPassword;

pub fn validate_password_change(new_password: &str, new_password_confirm: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    errors.capture(
        "new_password",
        INVALID_PASSWORD,
        RawPassword::try_new(new_password),
    );

    // Byte for byte
    if new_password != new_password_confirm {
        errors.reject(
            "new_password_confirm",
            WRONG_VALUE,
            "Passwords do not match",
        );
    }

    errors
}
