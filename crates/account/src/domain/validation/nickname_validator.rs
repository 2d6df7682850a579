// crates/account/src/domain/validation/nickname_validator.rs

use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{FieldErrors, Result};

use crate::domain::repositories::AccountRepository;
use crate::domain::validation::{INVALID_NICKNAME, WRONG_VALUE};
use crate::domain::value_objects::Nickname;

/// Format, then availability. `owner` is the account submitting the form:
/// re-submitting one's own nickname is not a collision.
pub async fn validate_nickname(
    accounts: &dyn AccountRepository,
    raw: &str,
    owner: Option<&AccountId>,
) -> Result<FieldErrors> {
    let mut errors = FieldErrors::new();

    let Some(nickname) = errors.capture("nickname", INVALID_NICKNAME, Nickname::try_new(raw))
    else {
        return Ok(errors);
    };

    if let Some(holder) = accounts.find_by_nickname(&nickname).await? {
        if owner != Some(holder.id()) {
            errors.reject(
                "nickname",
                WRONG_VALUE,
                format!("Nickname '{}' is already taken", nickname),
            );
        }
    }

    Ok(errors)
}
