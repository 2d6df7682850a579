use sqlx::migrate::Migrator;

pub mod repositories;
pub mod rows;

/// Studies, their manager/member links and events.
/// Runs after the account schema, which owns `accounts`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations/postgres");
