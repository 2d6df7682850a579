// crates/account/src/domain/validation/sign_up_validator.rs

use shared_kernel::errors::{FieldErrors, Result};

use crate::domain::repositories::AccountRepository;
use crate::domain::validation::{INVALID_EMAIL, INVALID_PASSWORD, validate_nickname};
use crate::domain::value_objects::{Email, RawPassword};

/// Checks every field so the form can report all problems at once.
pub async fn validate_sign_up(
    accounts: &dyn AccountRepository,
    nickname: &str,
    email: &str,
    password: &str,
) -> Result<FieldErrors> {
    let mut errors = validate_nickname(accounts, nickname, None).await?;

    if let Some(email) = errors.capture("email", INVALID_EMAIL, Email::try_new(email)) {
        if accounts.exists_by_email(&email).await? {
            errors.reject(
                "email",
                INVALID_EMAIL,
                format!("Email '{}' is already in use", email),
            );
        }
    }

    errors.capture("password", INVALID_PASSWORD, RawPassword::try_new(password));

    Ok(errors)
}
