mod join_study_command;
mod join_study_use_case;

pub use join_study_command::JoinStudyCommand;
pub use join_study_use_case::JoinStudyUseCase;

#[cfg(test)]
mod join_study_use_case_test;
