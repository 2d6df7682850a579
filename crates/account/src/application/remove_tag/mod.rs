mod remove_tag_use_case;

pub use remove_tag_use_case::RemoveTagUseCase;
