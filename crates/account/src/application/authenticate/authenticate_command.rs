// crates/account/src/application/authenticate/authenticate_command.rs

use serde::Deserialize;

/// `login` is either the email or the nickname
#[derive(Clone, Deserialize)]
pub struct AuthenticateCommand {
    pub login: String,
    pub password: String,
}

impl std::fmt::Debug for AuthenticateCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticateCommand")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}
