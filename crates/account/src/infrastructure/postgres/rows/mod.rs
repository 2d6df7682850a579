mod postgres_account_row;
mod postgres_tag_row;
mod postgres_zone_row;

pub use postgres_account_row::PostgresAccountRow;
pub use postgres_tag_row::PostgresTagRow;
pub use postgres_zone_row::PostgresZoneRow;
