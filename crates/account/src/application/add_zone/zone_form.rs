// crates/account/src/application/add_zone/zone_form.rs

use serde::Deserialize;

/// `zone_name` uses the display format `City(LocalName)/Province`
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneForm {
    pub zone_name: String,
}
