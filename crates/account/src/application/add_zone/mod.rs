mod add_zone_use_case;
mod zone_form;

pub use add_zone_use_case::AddZoneUseCase;
pub use zone_form::ZoneForm;
