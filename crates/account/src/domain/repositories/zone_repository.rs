// crates/account/src/domain/repositories/zone_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::Zone;
use crate::domain::value_objects::{City, Province, ZoneId};

#[async_trait]
pub trait ZoneRepository: Send + Sync {
    async fn find_by_city_and_province(
        &self,
        city: &City,
        province: &Province,
    ) -> Result<Option<Zone>>;

    async fn find_by_ids(&self, ids: &[ZoneId]) -> Result<Vec<Zone>>;

    /// Every known zone, ordered by city then province
    async fn find_all(&self) -> Result<Vec<Zone>>;

    /// Fails with `AlreadyExists` when (city, province) is taken
    async fn insert(&self, zone: &Zone) -> Result<()>;
}
