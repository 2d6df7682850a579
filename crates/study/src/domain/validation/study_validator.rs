// crates/study/src/domain/validation/study_validator.rs

use shared_kernel::errors::{FieldErrors, Result};

use crate::domain::repositories::StudyRepository;
use crate::domain::validation::{INVALID_VALUE, WRONG_PATH};
use crate::domain::value_objects::{FullDescription, ShortDescription, StudyPath, StudyTitle};

pub async fn validate_study(
    studies: &dyn StudyRepository,
    path: &str,
    title: &str,
    short_description: &str,
    full_description: &str,
) -> Result<FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Some(path) = errors.capture("path", WRONG_PATH, StudyPath::try_new(path)) {
        if studies.exists_by_path(&path).await? {
            errors.reject("path", WRONG_PATH, format!("Path '{}' is already used", path));
        }
    }
    errors.capture("title", INVALID_VALUE, StudyTitle::try_new(title));
    errors.extend(validate_description(short_description, full_description));

    Ok(errors)
}

pub fn validate_description(short_description: &str, full_description: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.capture(
        "short_description",
        INVALID_VALUE,
        ShortDescription::try_new(short_description),
    );
    errors.capture(
        "full_description",
        INVALID_VALUE,
        FullDescription::try_new(full_description),
    );
    errors
}
