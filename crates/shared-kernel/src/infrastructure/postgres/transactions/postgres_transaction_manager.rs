// crates/shared-kernel/src/infrastructure/postgres/transactions/postgres_transaction_manager.rs

use sqlx::PgPool;

use crate::domain::transaction::{Transaction, TransactionManager, TxFuture};
use crate::infrastructure::postgres::mappers::SqlxErrorExt;
use crate::infrastructure::postgres::transactions::PostgresTransaction;

pub struct PostgresTransactionManager {
    pool: PgPool,
}

impl PostgresTransactionManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TransactionManager for PostgresTransactionManager {
    fn in_transaction<'a>(
        &'a self,
        f: Box<dyn for<'t> FnOnce(&'t mut dyn Transaction) -> TxFuture<'t> + Send + 'a>,
    ) -> TxFuture<'a> {
        Box::pin(async move {
            let tx = self
                .pool
                .begin()
                .await
                .map_domain_infra("Failed to begin transaction")?;
            let mut wrapped = PostgresTransaction::new(tx);

            let outcome = {
                let handle: &mut dyn Transaction = &mut wrapped;
                f(handle).await
            };

            match outcome {
                Ok(()) => wrapped
                    .into_inner()
                    .commit()
                    .await
                    .map_commit("Failed to commit transaction"),
                Err(e) => {
                    if let Err(rollback_err) = wrapped.into_inner().rollback().await {
                        tracing::warn!(error = %rollback_err, "Rollback failed");
                    }
                    Err(e)
                }
            }
        })
    }
}
