// crates/account/src/application/register_account/sign_up_form.rs

use serde::Deserialize;

#[derive(Clone, Deserialize)]
pub struct SignUpForm {
    pub nickname: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SignUpForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpForm")
            .field("nickname", &self.nickname)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
