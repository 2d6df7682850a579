mod verify_email_command;
mod verify_email_use_case;

pub use verify_email_command::VerifyEmailCommand;
pub use verify_email_use_case::VerifyEmailUseCase;

#[cfg(test)]
mod verify_email_use_case_test;
