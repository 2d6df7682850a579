// crates/account/src/application/change_nickname/nickname_form.rs

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NicknameForm {
    pub nickname: String,
}
