mod resend_confirmation_email_command;
mod resend_confirmation_email_use_case;

pub use resend_confirmation_email_command::ResendConfirmationEmailCommand;
pub use resend_confirmation_email_use_case::ResendConfirmationEmailUseCase;

#[cfg(test)]
mod resend_confirmation_email_use_case_test;
