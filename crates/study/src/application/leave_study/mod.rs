mod leave_study_command;
mod leave_study_use_case;

pub use leave_study_command::LeaveStudyCommand;
pub use leave_study_use_case::LeaveStudyUseCase;
