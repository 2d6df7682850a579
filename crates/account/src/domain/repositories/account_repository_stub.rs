// crates/account/src/domain/repositories/account_repository_stub.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Account;
use crate::domain::repositories::AccountRepository;
use crate::domain::value_objects::{Email, Nickname};

#[derive(Default)]
pub struct AccountRepositoryStub {
    pub accounts: Arc<Mutex<HashMap<AccountId, Account>>>,
    /// Returned by every method when set
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
    /// Returned by the next `save` calls, consumed one by one
    pub save_errors: Arc<Mutex<Vec<DomainError>>>,
    pub save_calls: Arc<Mutex<u32>>,
}

impl AccountRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_account(&self, account: Account) {
        self.accounts.lock().unwrap().insert(*account.id(), account);
    }

    pub fn get(&self, id: &AccountId) -> Option<Account> {
        self.accounts.lock().unwrap().get(id).cloned()
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryStub {
    async fn find_by_id(
        &self,
        id: &AccountId,
        _tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<Account>> {
        self.check_error()?;
        Ok(self.get(id))
    }

    async fn find_by_nickname(&self, nickname: &Nickname) -> Result<Option<Account>> {
        self.check_error()?;
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| a.nickname() == nickname)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>> {
        self.check_error()?;
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| a.email() == email)
            .cloned())
    }

    async fn exists_by_nickname(&self, nickname: &Nickname) -> Result<bool> {
        self.check_error()?;
        Ok(self.accounts.lock().unwrap().values().any(|a| a.nickname() == nickname))
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool> {
        self.check_error()?;
        Ok(self.accounts.lock().unwrap().values().any(|a| a.email() == email))
    }

    async fn save(&self, account: &Account, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        self.check_error()?;
        *self.save_calls.lock().unwrap() += 1;

        let queued = {
            let mut errors = self.save_errors.lock().unwrap();
            if errors.is_empty() { None } else { Some(errors.remove(0)) }
        };
        if let Some(err) = queued {
            return Err(err);
        }

        self.add_account(account.clone());
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.check_error()?;
        self.accounts.lock().unwrap().clear();
        Ok(())
    }
}
