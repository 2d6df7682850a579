// crates/account/src/infrastructure/postgres/repositories/zone_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::{Pool, Postgres, query, query_as};
use uuid::Uuid;

use crate::domain::entities::Zone;
use crate::domain::repositories::ZoneRepository;
use crate::domain::value_objects::{City, Province, ZoneId};
use crate::infrastructure::postgres::rows::PostgresZoneRow;

const SELECT_ZONE: &str = "SELECT id, city, local_name_of_city, province FROM zones";

pub struct PostgresZoneRepository {
    pool: Pool<Postgres>,
}

impl PostgresZoneRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ZoneRepository for PostgresZoneRepository {
    async fn find_by_city_and_province(
        &self,
        city: &City,
        province: &Province,
    ) -> Result<Option<Zone>> {
        let sql = format!("{SELECT_ZONE} WHERE city = $1 AND province = $2");
        let city = city.as_str().to_string();
        let province = province.as_str().to_string();

        let row = <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query_as::<_, PostgresZoneRow>(&sql)
                    .bind(city)
                    .bind(province)
                    .fetch_optional(conn)
                    .await
                    .map_domain::<Zone>()
            })
        })
        .await?;

        Ok(row.map(Zone::from))
    }

    async fn find_by_ids(&self, ids: &[ZoneId]) -> Result<Vec<Zone>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!("{SELECT_ZONE} WHERE id = ANY($1) ORDER BY city, province");
        let ids: Vec<Uuid> = ids.iter().map(|id| id.as_uuid()).collect();

        let rows = <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query_as::<_, PostgresZoneRow>(&sql)
                    .bind(ids)
                    .fetch_all(conn)
                    .await
                    .map_domain::<Zone>()
            })
        })
        .await?;

        Ok(rows.into_iter().map(Zone::from).collect())
    }

    async fn find_all(&self) -> Result<Vec<Zone>> {
        let sql = format!("{SELECT_ZONE} ORDER BY city, province");

        let rows = <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query_as::<_, PostgresZoneRow>(&sql)
                    .fetch_all(conn)
                    .await
                    .map_domain::<Zone>()
            })
        })
        .await?;

        Ok(rows.into_iter().map(Zone::from).collect())
    }

    async fn insert(&self, zone: &Zone) -> Result<()> {
        let id = zone.id().as_uuid();
        let city = zone.city().as_str().to_string();
        let local = zone.local_name_of_city().as_str().to_string();
        let province = zone.province().as_str().to_string();

        <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query(
                    "INSERT INTO zones (id, city, local_name_of_city, province) VALUES ($1, $2, $3, $4)",
                )
                .bind(id)
                .bind(city)
                .bind(local)
                .bind(province)
                .execute(conn)
                .await
                .map_domain::<Zone>()
            })
        })
        .await?;
        Ok(())
    }
}
