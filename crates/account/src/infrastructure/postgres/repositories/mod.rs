mod account_repository;
mod tag_repository;
mod zone_repository;

pub use account_repository::PostgresAccountRepository;
pub use tag_repository::PostgresTagRepository;
pub use zone_repository::PostgresZoneRepository;
