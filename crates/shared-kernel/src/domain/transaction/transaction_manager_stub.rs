// crates/shared-kernel/src/domain/transaction/transaction_manager_stub.rs

use crate::domain::transaction::{FakeTransaction, Transaction, TransactionManager, TxFuture};

/// Runs the work closure against a `FakeTransaction`; nothing to commit.
pub struct StubTxManager;

impl TransactionManager for StubTxManager {
    fn in_transaction<'a>(
        &'a self,
        f: Box<dyn for<'t> FnOnce(&'t mut dyn Transaction) -> TxFuture<'t> + Send + 'a>,
    ) -> TxFuture<'a> {
        Box::pin(async move {
            let mut tx = FakeTransaction;
            f(&mut tx).await
        })
    }
}
