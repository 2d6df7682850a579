// crates/account/src/application/resend_confirmation_email/resend_confirmation_email_use_case.rs

use std::sync::Arc;

use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::{RetryConfig, with_retry};

use crate::application::resend_confirmation_email::ResendConfirmationEmailCommand;
use crate::domain::entities::Account;
use crate::domain::ports::VerificationNotifier;
use crate::domain::repositories::AccountRepository;

pub struct ResendConfirmationEmailUseCase {
    account_repo: Arc<dyn AccountRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    notifier: Arc<dyn VerificationNotifier>,
    clock: Arc<dyn Clock>,
}

impl ResendConfirmationEmailUseCase {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        tx_manager: Arc<dyn TransactionManager>,
        notifier: Arc<dyn VerificationNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            account_repo,
            tx_manager,
            notifier,
            clock,
        }
    }

    pub async fn execute(&self, command: ResendConfirmationEmailCommand) -> Result<()> {
        let account = with_retry(RetryConfig::default(), || async {
            self.try_execute_once(&command).await
        })
        .await?;

        if let Some(token) = account.email_check_token() {
            self.notifier
                .send_confirmation(account.email(), account.nickname(), token)
                .await;
        }
        Ok(())
    }

    async fn try_execute_once(&self, cmd: &ResendConfirmationEmailCommand) -> Result<Account> {
        let mut account = self
            .account_repo
            .find_by_id(&cmd.account_id, None)
            .await?
            .ok_or_not_found(cmd.account_id)?;

        let now = self.clock.now();
        if !account.can_send_confirmation_email(now) {
            return Err(DomainError::Forbidden {
                reason: "A confirmation email can be sent once per hour".into(),
            });
        }

        account.generate_email_check_token(now);

        let to_save = account.clone();
        self.tx_manager
            .run_in_transaction(move |tx| {
                let repo = self.account_repo.clone();
                Box::pin(async move { repo.save(&to_save, Some(tx)).await })
            })
            .await?;

        Ok(account)
    }
}
