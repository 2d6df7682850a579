mod seed_zones_command;
mod seed_zones_use_case;

pub use seed_zones_command::SeedZonesCommand;
pub use seed_zones_use_case::SeedZonesUseCase;
