mod description_form;
mod update_study_description_use_case;

pub use description_form::DescriptionForm;
pub use update_study_description_use_case::UpdateStudyDescriptionUseCase;
