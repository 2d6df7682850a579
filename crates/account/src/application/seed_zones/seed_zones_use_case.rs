// crates/account/src/application/seed_zones/seed_zones_use_case.rs

use std::sync::Arc;

use futures::{StreamExt, TryStreamExt, stream};
use shared_kernel::errors::{DomainError, Result};

use crate::application::resolvers::ZoneResolver;
use crate::application::seed_zones::SeedZonesCommand;
use crate::domain::value_objects::{City, LocalNameOfCity, Province, ZoneLabel};

const SEED_CONCURRENCY: usize = 8;

/// Loads the zone reference table. Safe to run repeatedly: every line goes
/// through find-or-create.
pub struct SeedZonesUseCase {
    zone_resolver: Arc<ZoneResolver>,
}

impl SeedZonesUseCase {
    pub fn new(zone_resolver: Arc<ZoneResolver>) -> Self {
        Self { zone_resolver }
    }

    /// Returns the number of zones resolved.
    ///
    /// The whole file is parsed before anything is written, so a malformed
    /// line leaves the table untouched.
    pub async fn execute(&self, command: SeedZonesCommand) -> Result<usize> {
        let labels = parse_csv(&command.csv)?;
        let total = labels.len();

        stream::iter(labels)
            .map(|label| async move { self.zone_resolver.resolve(&label).await })
            .buffer_unordered(SEED_CONCURRENCY)
            .try_for_each(|_| async { Ok(()) })
            .await?;

        tracing::info!(zones = total, "Zone table seeded");
        Ok(total)
    }
}

fn parse_csv(csv: &str) -> Result<Vec<ZoneLabel>> {
    csv.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(line).map_err(|e| at_line(index + 1, e)))
        .collect()
}

fn parse_line(line: &str) -> Result<ZoneLabel> {
    let parts: Vec<&str> = line.split(',').collect();
    let [city, local, province] = parts.as_slice() else {
        return Err(DomainError::Validation {
            field: "csv",
            reason: format!("expected 3 columns, found {}", parts.len()),
        });
    };

    Ok(ZoneLabel::new(
        City::try_new(*city)?,
        LocalNameOfCity::try_new(*local)?,
        Province::try_new(*province)?,
    ))
}

fn at_line(line: usize, error: DomainError) -> DomainError {
    let reason = match error {
        DomainError::Validation { field, reason } => format!("{}: {}", field, reason),
        other => other.to_string(),
    };
    DomainError::Validation {
        field: "csv",
        reason: format!("line {}: {}", line, reason),
    }
}
