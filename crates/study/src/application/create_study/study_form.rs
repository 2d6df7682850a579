// crates/study/src/application/create_study/study_form.rs

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct StudyForm {
    pub path: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
}
