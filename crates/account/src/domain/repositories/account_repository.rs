// crates/account/src/domain/repositories/account_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;

use crate::domain::entities::Account;
use crate::domain::value_objects::{Email, Nickname};

/// Persistence port for the account aggregate, tag and zone sets included.
/// Absence is `Ok(None)`, never an error.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(
        &self,
        id: &AccountId,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<Account>>;

    async fn find_by_nickname(&self, nickname: &Nickname) -> Result<Option<Account>>;

    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>>;

    async fn exists_by_nickname(&self, nickname: &Nickname) -> Result<bool>;

    async fn exists_by_email(&self, email: &Email) -> Result<bool>;

    /// Inserts new aggregates, updates existing ones under optimistic locking
    /// (`ConcurrencyConflict` when the stored version moved on).
    async fn save(&self, account: &Account, tx: Option<&mut dyn Transaction>) -> Result<()>;

    async fn delete_all(&self) -> Result<()>;
}
