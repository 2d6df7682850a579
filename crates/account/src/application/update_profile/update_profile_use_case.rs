// crates/account/src/application/update_profile/update_profile_use_case.rs

use std::sync::Arc;

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{Result, Submission};
use shared_kernel::infrastructure::{RetryConfig, with_retry};

use crate::application::update_profile::ProfileForm;
use crate::domain::repositories::AccountRepository;
use crate::domain::validation::validate_profile;
use crate::domain::value_objects::Profile;

pub struct UpdateProfileUseCase {
    account_repo: Arc<dyn AccountRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl UpdateProfileUseCase {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            account_repo,
            tx_manager,
        }
    }

    pub async fn execute(&self, account_id: AccountId, form: ProfileForm) -> Result<Submission<()>> {
        let errors = validate_profile(
            form.bio.as_deref(),
            form.url.as_deref(),
            form.occupation.as_deref(),
            form.location.as_deref(),
        );

        Submission::guard(errors, || async {
            let profile = Profile::try_from_input(
                form.bio.as_deref(),
                form.url.as_deref(),
                form.occupation.as_deref(),
                form.location.as_deref(),
            )?;

            with_retry(RetryConfig::default(), || async {
                self.try_execute_once(&account_id, &profile).await
            })
            .await
        })
        .await
    }

    async fn try_execute_once(&self, account_id: &AccountId, profile: &Profile) -> Result<()> {
        let mut account = self
            .account_repo
            .find_by_id(account_id, None)
            .await?
            .ok_or_not_found(account_id)?;

        if !account.update_profile(profile.clone()) {
            return Ok(());
        }

        self.tx_manager
            .run_in_transaction(move |tx| {
                let repo = self.account_repo.clone();
                Box::pin(async move { repo.save(&account, Some(tx)).await })
            })
            .await
    }
}
