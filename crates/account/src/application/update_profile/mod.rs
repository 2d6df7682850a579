mod profile_form;
mod update_profile_use_case;

pub use profile_form::ProfileForm;
pub use update_profile_use_case::UpdateProfileUseCase;
