// crates/shared-kernel/src/domain/transaction/transaction_manager.rs

use std::future::Future;
use std::pin::Pin;

use crate::domain::transaction::Transaction;
use crate::errors::Result;

pub type TxFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

/// Storage transaction boundary.
///
/// The work closure receives the open transaction; the manager commits when
/// the returned future resolves to `Ok` and rolls back otherwise.
pub trait TransactionManager: Send + Sync {
    fn in_transaction<'a>(
        &'a self,
        f: Box<dyn for<'t> FnOnce(&'t mut dyn Transaction) -> TxFuture<'t> + Send + 'a>,
    ) -> TxFuture<'a>;
}

pub trait TransactionManagerExt: TransactionManager {
    fn run_in_transaction<'a, F>(&'a self, f: F) -> TxFuture<'a>
    where
        F: for<'t> FnOnce(&'t mut dyn Transaction) -> TxFuture<'t> + Send + 'a,
    {
        self.in_transaction(Box::new(f))
    }
}

impl<T: TransactionManager + ?Sized> TransactionManagerExt for T {}
