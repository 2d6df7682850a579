// crates/account/src/application/add_tag/tag_form.rs

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TagForm {
    pub tag_title: String,
}
