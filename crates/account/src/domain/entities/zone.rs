// crates/account/src/domain/entities/zone.rs

use shared_kernel::domain::entities::EntityMetadata;

use crate::domain::value_objects::{City, LocalNameOfCity, Province, ZoneId, ZoneLabel};

/// Region an account is active in, unique by city and province.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    id: ZoneId,
    city: City,
    local_name_of_city: LocalNameOfCity,
    province: Province,
}

impl Zone {
    pub fn new(label: ZoneLabel) -> Self {
        Self {
            id: ZoneId::new(),
            city: label.city,
            local_name_of_city: label.local_name_of_city,
            province: label.province,
        }
    }

    pub fn restore(
        id: ZoneId,
        city: City,
        local_name_of_city: LocalNameOfCity,
        province: Province,
    ) -> Self {
        Self {
            id,
            city,
            local_name_of_city,
            province,
        }
    }

    pub fn id(&self) -> &ZoneId {
        &self.id
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    pub fn local_name_of_city(&self) -> &LocalNameOfCity {
        &self.local_name_of_city
    }

    pub fn province(&self) -> &Province {
        &self.province
    }

    pub fn label(&self) -> ZoneLabel {
        ZoneLabel::new(
            self.city.clone(),
            self.local_name_of_city.clone(),
            self.province.clone(),
        )
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})/{}", self.city, self.local_name_of_city, self.province)
    }
}

impl EntityMetadata for Zone {
    fn entity_name() -> &'static str {
        "Zone"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "zones_city_province_key" => "zone_name",
            _ => "unique_constraint",
        }
    }
}
