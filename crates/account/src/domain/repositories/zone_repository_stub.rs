// crates/account/src/domain/repositories/zone_repository_stub.rs

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Zone;
use crate::domain::repositories::ZoneRepository;
use crate::domain::value_objects::{City, Province, ZoneId};

#[derive(Default)]
pub struct ZoneRepositoryStub {
    pub zones: Arc<Mutex<Vec<Zone>>>,
    pub insert_calls: Arc<Mutex<u32>>,
    pub insert_delay: Option<Duration>,
}

impl ZoneRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_insert_delay(mut self, delay: Duration) -> Self {
        self.insert_delay = Some(delay);
        self
    }

    pub fn add_zone(&self, zone: Zone) {
        self.zones.lock().unwrap().push(zone);
    }
}

fn sort_zones(zones: &mut [Zone]) {
    zones.sort_by(|a, b| {
        a.city()
            .cmp(b.city())
            .then_with(|| a.province().cmp(b.province()))
    });
}

#[async_trait]
impl ZoneRepository for ZoneRepositoryStub {
    async fn find_by_city_and_province(
        &self,
        city: &City,
        province: &Province,
    ) -> Result<Option<Zone>> {
        Ok(self
            .zones
            .lock()
            .unwrap()
            .iter()
            .find(|z| z.city() == city && z.province() == province)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[ZoneId]) -> Result<Vec<Zone>> {
        let mut found: Vec<Zone> = self
            .zones
            .lock()
            .unwrap()
            .iter()
            .filter(|z| ids.contains(z.id()))
            .cloned()
            .collect();
        sort_zones(&mut found);
        Ok(found)
    }

    async fn find_all(&self) -> Result<Vec<Zone>> {
        let mut all = self.zones.lock().unwrap().clone();
        sort_zones(&mut all);
        Ok(all)
    }

    async fn insert(&self, zone: &Zone) -> Result<()> {
        *self.insert_calls.lock().unwrap() += 1;
        if let Some(delay) = self.insert_delay {
            tokio::time::sleep(delay).await;
        }

        let mut zones = self.zones.lock().unwrap();
        if zones
            .iter()
            .any(|z| z.city() == zone.city() && z.province() == zone.province())
        {
            return Err(DomainError::AlreadyExists {
                entity: "Zone",
                field: "zone_name",
                value: zone.to_string(),
            });
        }
        zones.push(zone.clone());
        Ok(())
    }
}
