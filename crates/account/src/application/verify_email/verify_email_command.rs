// crates/account/src/application/verify_email/verify_email_command.rs

use serde::Deserialize;

/// Query parameters of the confirmation link
#[derive(Clone, Deserialize)]
pub struct VerifyEmailCommand {
    pub email: String,
    pub token: String,
}
