// crates/account/src/application/get_account_preferences/account_preferences.rs

use serde::Serialize;

/// Read model behind the tag and zone settings pages.
///
/// Whitelists hold every known title / zone label, ordered, and feed the
/// autocomplete of the preference inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountPreferences {
    pub tags: Vec<String>,
    pub zones: Vec<String>,
    pub tag_whitelist: Vec<String>,
    pub zone_whitelist: Vec<String>,
}
