// crates/account/src/application/resolvers/zone_resolver.rs

use std::sync::Arc;

use shared_kernel::errors::Result;
use shared_kernel::infrastructure::concurrency::Singleflight;

use crate::domain::entities::Zone;
use crate::domain::repositories::ZoneRepository;
use crate::domain::value_objects::{City, Province, ZoneLabel};

/// Find-or-create for zones, keyed by (city, province).
pub struct ZoneResolver {
    zone_repo: Arc<dyn ZoneRepository>,
    flights: Singleflight<(City, Province), Zone>,
}

impl ZoneResolver {
    pub fn new(zone_repo: Arc<dyn ZoneRepository>) -> Self {
        Self {
            zone_repo,
            flights: Singleflight::new(),
        }
    }

    pub async fn resolve(&self, label: &ZoneLabel) -> Result<Zone> {
        if let Some(zone) = self.find(label).await? {
            return Ok(zone);
        }

        let key = (label.city.clone(), label.province.clone());
        self.flights.execute(key, || self.create(label)).await
    }

    async fn find(&self, label: &ZoneLabel) -> Result<Option<Zone>> {
        self.zone_repo
            .find_by_city_and_province(&label.city, &label.province)
            .await
    }

    async fn create(&self, label: &ZoneLabel) -> Result<Zone> {
        let zone = Zone::new(label.clone());

        match self.zone_repo.insert(&zone).await {
            Ok(()) => {
                tracing::debug!(zone = %zone, "Zone created");
                Ok(zone)
            }
            Err(e) if e.is_already_exists() => self.find(label).await?.ok_or(e),
            Err(e) => Err(e),
        }
    }
}
