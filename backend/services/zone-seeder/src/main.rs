// backend/services/zone-seeder/src/main.rs

use std::sync::Arc;

use account::application::resolvers::ZoneResolver;
use account::application::seed_zones::{SeedZonesCommand, SeedZonesUseCase};
use account::infrastructure::postgres::MIGRATOR;
use account::infrastructure::postgres::repositories::PostgresZoneRepository;
use anyhow::Context;
use shared_kernel::infrastructure::bootstrap::init_tracing;
use shared_kernel::infrastructure::postgres::PostgresContext;

const DEFAULT_CSV_PATH: &str = "crates/account/resources/zones_kr.csv";

/// Loads the zone catalogue. Safe to run on every deploy: known zones are skipped.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let csv_path = std::env::var("ZONE_CSV_PATH").unwrap_or_else(|_| DEFAULT_CSV_PATH.to_string());
    let csv = tokio::fs::read_to_string(&csv_path)
        .await
        .with_context(|| format!("cannot read zone file {csv_path}"))?;

    let postgres = PostgresContext::builder()?.build().await?;
    postgres.migrate(&MIGRATOR).await?;

    let resolver = Arc::new(ZoneResolver::new(Arc::new(PostgresZoneRepository::new(
        postgres.pool(),
    ))));
    let seeded = SeedZonesUseCase::new(resolver)
        .execute(SeedZonesCommand { csv })
        .await?;

    tracing::info!(zones = seeded, file = %csv_path, "Zone catalogue ready");
    Ok(())
}
