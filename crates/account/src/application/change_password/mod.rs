mod change_password_use_case;
mod password_form;

pub use change_password_use_case::ChangePasswordUseCase;
pub use password_form::PasswordForm;
