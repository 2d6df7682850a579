// crates/account/src/application/resend_confirmation_email/resend_confirmation_email_command.rs

use shared_kernel::domain::value_objects::AccountId;

#[derive(Debug, Clone)]
pub struct ResendConfirmationEmailCommand {
    pub account_id: AccountId,
}
