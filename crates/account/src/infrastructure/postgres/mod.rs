use sqlx::migrate::Migrator;

pub mod repositories;
pub mod rows;

/// Schema of the account crate: accounts, tags, zones and the link tables
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations/postgres");
