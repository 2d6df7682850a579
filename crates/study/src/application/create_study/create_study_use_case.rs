// crates/study/src/application/create_study/create_study_use_case.rs

use std::sync::Arc;

use shared_kernel::clock::Clock;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{Result, Submission};

use crate::application::create_study::StudyForm;
use crate::domain::entities::Study;
use crate::domain::repositories::StudyRepository;
use crate::domain::validation::validate_study;
use crate::domain::value_objects::{FullDescription, ShortDescription, StudyId, StudyPath, StudyTitle};

pub struct CreateStudyUseCase {
    study_repo: Arc<dyn StudyRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    clock: Arc<dyn Clock>,
}

impl CreateStudyUseCase {
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

    /// The submitting account becomes the first manager.
    pub async fn execute(&self, account_id: AccountId, form: StudyForm) -> Result<Submission<StudyId>> {
        let errors = validate_study(
            self.study_repo.as_ref(),
            &form.path,
            &form.title,
            &form.short_description,
            &form.full_description,
        )
        .await?;

        Submission::guard(errors, || self.create(account_id, &form)).await
    }

    async fn create(&self, account_id: AccountId, form: &StudyForm) -> Result<StudyId> {
        let study = Study::create(
            StudyPath::try_new(form.path.as_str())?,
            StudyTitle::try_new(form.title.as_str())?,
            ShortDescription::try_new(form.short_description.as_str())?,
            FullDescription::try_new(form.full_description.as_str())?,
            account_id,
            self.clock.now(),
        );
        let study_id = *study.id();
        let path = study.path().clone();

        // A path taken after validation comes back as AlreadyExists
        self.tx_manager
            .run_in_transaction(move |tx| {
                let repo = self.study_repo.clone();
                Box::pin(async move { repo.save(&study, Some(tx)).await })
            })
            .await?;

        tracing::info!(study_id = %study_id, path = %path, manager = %account_id, "Study created");
        Ok(study_id)
    }
}
