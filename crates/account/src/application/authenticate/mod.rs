mod authenticate_command;
mod authenticate_use_case;

pub use authenticate_command::AuthenticateCommand;
pub use authenticate_use_case::AuthenticateUseCase;
