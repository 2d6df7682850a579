// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_test_context.rs

use std::path::Path;

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres as PostgresImage;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::postgres::factories::PostgresContext;
use crate::infrastructure::postgres::utils::PostgresTestContextBuilder;

/// Throwaway Postgres container with migrations applied.
/// The container lives as long as this context.
pub struct PostgresTestContext {
    context: PostgresContext,
    _container: ContainerAsync<PostgresImage>,
}

fn container_err(e: impl std::fmt::Display) -> AppError {
    AppError::new(
        ErrorCode::InfrastructureFailure,
        format!("Test container failure: {}", e),
    )
}

impl PostgresTestContext {
    pub fn builder() -> PostgresTestContextBuilder {
        PostgresTestContextBuilder::new()
    }

    pub(crate) async fn restore(builder: PostgresTestContextBuilder) -> AppResult<Self> {
        let container = PostgresImage::default()
            .with_user(&builder.user)
            .with_password(&builder.password)
            .with_db_name(&builder.db_name)
            .with_name(&builder.image_name)
            .with_tag(&builder.image_tag)
            .start()
            .await
            .map_err(container_err)?;

        let host_port = container
            .get_host_port_ipv4(5432)
            .await
            .map_err(container_err)?;
        let url = format!(
            "postgres://{}:{}@127.0.0.1:{}/{}",
            builder.user, builder.password, host_port, builder.db_name
        );

        let mut context_builder = PostgresContext::builder_raw().with_url(&url);
        if let Some(cfg) = builder.config {
            context_builder = context_builder.with_config(cfg);
        }
        let context = context_builder.build().await?;

        // Several crates share one schema history, so each migrator ignores
        // versions it does not own.
        for dir in &builder.migrations {
            let mut migrator = Migrator::new(Path::new(dir)).await?;
            migrator.set_ignore_missing(true);
            context.migrate(&migrator).await?;
        }

        Ok(Self {
            context,
            _container: container,
        })
    }

    pub fn pool(&self) -> PgPool {
        self.context.pool()
    }

    pub fn url(&self) -> &str {
        self.context.url()
    }
}
