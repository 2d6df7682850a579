// crates/account/src/application/verify_email/verify_email_use_case.rs

use std::sync::Arc;

use shared_kernel::clock::Clock;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::{RetryConfig, with_retry};

use crate::application::verify_email::VerifyEmailCommand;
use crate::domain::entities::Account;
use crate::domain::repositories::AccountRepository;
use crate::domain::value_objects::Email;

pub struct VerifyEmailUseCase {
    account_repo: Arc<dyn AccountRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    clock: Arc<dyn Clock>,
}

impl VerifyEmailUseCase {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        tx_manager: Arc<dyn TransactionManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            account_repo,
            tx_manager,
            clock,
        }
    }

    /// Returns the verified account; unknown email or wrong token is a
    /// validation failure on the matching field.
    pub async fn execute(&self, command: VerifyEmailCommand) -> Result<Account> {
        with_retry(RetryConfig::default(), || async {
            self.try_execute_once(&command).await
        })
        .await
    }

    async fn try_execute_once(&self, cmd: &VerifyEmailCommand) -> Result<Account> {
        let email = Email::try_new(cmd.email.as_str())?;

        let mut account = self
            .account_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| DomainError::Validation {
                field: "email",
                reason: "No account is registered with this email".into(),
            })?;

        if !account.complete_sign_up(&cmd.token, self.clock.now())? {
            return Ok(account);
        }

        let to_save = account.clone();
        self.tx_manager
            .run_in_transaction(move |tx| {
                let repo = self.account_repo.clone();
                Box::pin(async move { repo.save(&to_save, Some(tx)).await })
            })
            .await?;

        tracing::info!(account_id = %account.id(), "Email verified");
        Ok(account)
    }
}
