// crates/account/src/application/authenticate/authenticate_use_case.rs

use std::sync::Arc;

use shared_kernel::errors::{DomainError, Result};

use crate::application::authenticate::AuthenticateCommand;
use crate::domain::entities::Account;
use crate::domain::ports::PasswordEncoder;
use crate::domain::repositories::AccountRepository;
use crate::domain::value_objects::{Email, Nickname};

pub struct AuthenticateUseCase {
    account_repo: Arc<dyn AccountRepository>,
    password_encoder: Arc<dyn PasswordEncoder>,
}

impl AuthenticateUseCase {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        password_encoder: Arc<dyn PasswordEncoder>,
    ) -> Self {
        Self {
            account_repo,
            password_encoder,
        }
    }

    /// Unknown login and wrong password are indistinguishable to the caller
    pub async fn execute(&self, command: AuthenticateCommand) -> Result<Account> {
        let account = self.find_by_login(&command.login).await?;

        match account {
            Some(account)
                if self
                    .password_encoder
                    .matches(&command.password, account.password_hash()) =>
            {
                tracing::debug!(account_id = %account.id(), "Authenticated");
                Ok(account)
            }
            _ => Err(DomainError::Unauthorized {
                reason: "Bad credentials".into(),
            }),
        }
    }

    /// Email first, then nickname
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>> {
        if let Ok(email) = Email::try_new(login) {
            if let Some(account) = self.account_repo.find_by_email(&email).await? {
                return Ok(Some(account));
            }
        }

        match Nickname::try_new(login) {
            Ok(nickname) => self.account_repo.find_by_nickname(&nickname).await,
            Err(_) => Ok(None),
        }
    }
}
