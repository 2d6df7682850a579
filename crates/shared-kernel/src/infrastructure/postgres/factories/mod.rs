mod postgres_config;
mod postgres_context_builder;
mod postgres_context;

pub use postgres_config::PostgresConfig;
pub use postgres_context_builder::PostgresContextBuilder;
pub use postgres_context::PostgresContext;