mod create_study_use_case;
mod study_form;

pub use create_study_use_case::CreateStudyUseCase;
pub use study_form::StudyForm;
