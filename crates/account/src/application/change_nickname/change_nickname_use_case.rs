// crates/account/src/application/change_nickname/change_nickname_use_case.rs

use std::sync::Arc;

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{Result, Submission};
use shared_kernel::infrastructure::{RetryConfig, with_retry};

use crate::application::change_nickname::NicknameForm;
use crate::domain::repositories::AccountRepository;
use crate::domain::validation::validate_nickname;
use crate::domain::value_objects::Nickname;

pub struct ChangeNicknameUseCase {
    account_repo: Arc<dyn AccountRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl ChangeNicknameUseCase {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            account_repo,
            tx_manager,
        }
    }

    pub async fn execute(&self, account_id: AccountId, form: NicknameForm) -> Result<Submission<()>> {
        let errors =
            validate_nickname(self.account_repo.as_ref(), &form.nickname, Some(&account_id)).await?;

        Submission::guard(errors, || async {
            let nickname = Nickname::try_new(form.nickname.as_str())?;
            with_retry(RetryConfig::default(), || async {
                self.try_execute_once(&account_id, &nickname).await
            })
            .await
        })
        .await
    }

    async fn try_execute_once(&self, account_id: &AccountId, nickname: &Nickname) -> Result<()> {
        let mut account = self
            .account_repo
            .find_by_id(account_id, None)
            .await?
            .ok_or_not_found(account_id)?;

        if !account.change_nickname(nickname.clone()) {
            tracing::debug!(account_id = %account_id, "Nickname unchanged");
            return Ok(());
        }

        // The storage unique constraint still guards against a concurrent
        // taker: that surfaces as AlreadyExists, never retried.
        self.tx_manager
            .run_in_transaction(move |tx| {
                let repo = self.account_repo.clone();
                Box::pin(async move { repo.save(&account, Some(tx)).await })
            })
            .await
    }
}
