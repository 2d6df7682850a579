// crates/account/src/application/seed_zones/seed_zones_command.rs

/// CSV text, one `city,local_name_of_city,province` record per line
#[derive(Debug, Clone)]
pub struct SeedZonesCommand {
    pub csv: String,
}
