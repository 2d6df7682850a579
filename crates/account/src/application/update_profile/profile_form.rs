// crates/account/src/application/update_profile/profile_form.rs

use serde::Deserialize;

/// Absent or blank fields clear the stored value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    pub bio: Option<String>,
    pub url: Option<String>,
    pub occupation: Option<String>,
    pub location: Option<String>,
}
