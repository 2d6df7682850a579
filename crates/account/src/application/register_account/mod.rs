mod register_account_use_case;
mod sign_up_form;

pub use register_account_use_case::RegisterAccountUseCase;
pub use sign_up_form::SignUpForm;
