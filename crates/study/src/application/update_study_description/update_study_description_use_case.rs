// crates/study/src/application/update_study_description/update_study_description_use_case.rs

use std::sync::Arc;

use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{Result, Submission};
use shared_kernel::infrastructure::{RetryConfig, with_retry};

use crate::application::authorization::require_manager;
use crate::application::update_study_description::DescriptionForm;
use crate::domain::repositories::StudyRepository;
use crate::domain::validation::validate_description;
use crate::domain::value_objects::{FullDescription, ShortDescription, StudyId};

pub struct UpdateStudyDescriptionUseCase {
    study_repo: Arc<dyn StudyRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    clock: Arc<dyn Clock>,
}

impl UpdateStudyDescriptionUseCase {
    pub fn new(
        study_repo: Arc<dyn StudyRepository>,
        tx_manager: Arc<dyn TransactionManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            study_repo,
            tx_manager,
            clock,
        }
    }

    /// `Forbidden` for non-managers, checked before the form is looked at.
    pub async fn execute(
        &self,
        account_id: AccountId,
        study_id: StudyId,
        form: DescriptionForm,
    ) -> Result<Submission<()>> {
        let study = self
            .study_repo
            .find_by_id(&study_id, None)
            .await?
            .ok_or_not_found(study_id)?;
        require_manager(&study, &account_id)?;

        let errors = validate_description(&form.short_description, &form.full_description);

        Submission::guard(errors, || async {
            let short = ShortDescription::try_new(form.short_description.as_str())?;
            let full = FullDescription::try_new(form.full_description.as_str())?;

            with_retry(RetryConfig::default(), || async {
                self.try_execute_once(&account_id, &study_id, &short, &full).await
            })
            .await
        })
        .await
    }

    async fn try_execute_once(
        &self,
        account_id: &AccountId,
        study_id: &StudyId,
        short: &ShortDescription,
        full: &FullDescription,
    ) -> Result<()> {
        let mut study = self
            .study_repo
            .find_by_id(study_id, None)
            .await?
            .ok_or_not_found(study_id)?;
        // Managers may have changed since the first read
        require_manager(&study, account_id)?;

        if !study.update_description(short.clone(), full.clone(), self.clock.now()) {
            tracing::debug!(study_id = %study_id, "Description unchanged");
            return Ok(());
        }

        self.tx_manager
            .run_in_transaction(move |tx| {
                let repo = self.study_repo.clone();
                Box::pin(async move { repo.save(&study, Some(tx)).await })
            })
            .await
    }
}
