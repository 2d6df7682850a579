pub mod factories;
mod mappers;
pub mod transactions;

#[cfg(feature = "test-utils")]
pub mod utils;

pub use factories::{PostgresConfig, PostgresContext, PostgresContextBuilder};
pub use mappers::SqlxErrorExt;
pub use transactions::{PostgresTransaction, PostgresTransactionManager, TransactionExt};
