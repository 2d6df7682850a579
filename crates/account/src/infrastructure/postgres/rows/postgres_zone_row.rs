// crates/account/src/infrastructure/postgres/rows/postgres_zone_row.rs

use shared_kernel::domain::Identifier;
use uuid::Uuid;

use crate::domain::entities::Zone;
use crate::domain::value_objects::{City, LocalNameOfCity, Province, ZoneId};

#[derive(Debug, sqlx::FromRow)]
pub struct PostgresZoneRow {
    pub id: Uuid,
    pub city: String,
    pub local_name_of_city: String,
    pub province: String,
}

impl From<PostgresZoneRow> for Zone {
    fn from(row: PostgresZoneRow) -> Self {
        Zone::restore(
            ZoneId::from_uuid(row.id),
            City::from_raw(row.city),
            LocalNameOfCity::from_raw(row.local_name_of_city),
            Province::from_raw(row.province),
        )
    }
}
