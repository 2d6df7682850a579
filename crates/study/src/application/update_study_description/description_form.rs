// crates/study/src/application/update_study_description/description_form.rs

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DescriptionForm {
    pub short_description: String,
    pub full_description: String,
}
