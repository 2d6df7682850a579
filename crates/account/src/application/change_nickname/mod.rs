mod change_nickname_use_case;
mod nickname_form;

pub use change_nickname_use_case::ChangeNicknameUseCase;
pub use nickname_form::NicknameForm;

#[cfg(test)]
mod change_nickname_use_case_test;
