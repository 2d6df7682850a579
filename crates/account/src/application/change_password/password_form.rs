// crates/account/src/application/change_password/password_form.rs

use serde::Deserialize;

#[derive(Clone, Deserialize)]
pub struct PasswordForm {
    pub new_password: String,
    pub new_password_confirm: String,
}

impl std::fmt::Debug for PasswordForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordForm { .. }")
    }
}
