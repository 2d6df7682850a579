// crates/account/tests/common/mod.rs

use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;

/// Fresh Postgres container with the account schema applied
pub async fn setup_postgres_test_db() -> PostgresTestContext {
    PostgresTestContext::builder()
        .with_migrations(&["migrations/postgres"])
        .build()
        .await
        .expect("Postgres test container should start")
}
