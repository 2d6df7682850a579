// crates/account/src/application/change_password/change_password_use_case.rs

use std::sync::Arc;

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{Result, Submission};
use shared_kernel::infrastructure::{RetryConfig, with_retry};

use crate::application::change_password::PasswordForm;
use crate::domain::ports::PasswordEncoder;
use crate::domain::repositories::AccountRepository;
use crate::domain::validation::validate_password_change;
use crate::domain::value_objects::{PasswordHash, RawPassword};

pub struct ChangePasswordUseCase {
    account_repo: Arc<dyn AccountRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    password_encoder: Arc<dyn PasswordEncoder>,
}

impl ChangePasswordUseCase {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        tx_manager: Arc<dyn TransactionManager>,
        password_encoder: Arc<dyn PasswordEncoder>,
    ) -> Self {
        Self {
            account_repo,
            tx_manager,
            password_encoder,
        }
    }

    pub async fn execute(&self, account_id: AccountId, form: PasswordForm) -> Result<Submission<()>> {
        let errors = validate_password_change(&form.new_password, &form.new_password_confirm);

        Submission::guard(errors, || async {
            // Hashed once, outside the retry loop
            let hash = self
                .password_encoder
                .encode(&RawPassword::try_new(form.new_password.as_str())?)?;

            with_retry(RetryConfig::default(), || async {
                self.try_execute_once(&account_id, &hash).await
            })
            .await
        })
        .await
    }

    async fn try_execute_once(&self, account_id: &AccountId, hash: &PasswordHash) -> Result<()> {
        let mut account = self
            .account_repo
            .find_by_id(account_id, None)
            .await?
            .ok_or_not_found(account_id)?;

        account.change_password(hash.clone());

        self.tx_manager
            .run_in_transaction(move |tx| {
                let repo = self.account_repo.clone();
                Box::pin(async move { repo.save(&account, Some(tx)).await })
            })
            .await?;

        tracing::info!(account_id = %account_id, "Password changed");
        Ok(())
    }
}
