mod remove_zone_use_case;

pub use remove_zone_use_case::RemoveZoneUseCase;

#[cfg(test)]
mod remove_zone_use_case_test;
