mod add_tag_use_case;
mod tag_form;

pub use add_tag_use_case::AddTagUseCase;
pub use tag_form::TagForm;
