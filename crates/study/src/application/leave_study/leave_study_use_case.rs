// crates/study/src/application/leave_study/leave_study_use_case.rs

use std::sync::Arc;

use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::{RetryConfig, with_retry};

use crate::application::leave_study::LeaveStudyCommand;
use crate::domain::repositories::StudyRepository;

pub struct LeaveStudyUseCase {
    study_repo: Arc<dyn StudyRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    clock: Arc<dyn Clock>,
}

impl LeaveStudyUseCase {
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

    pub async fn execute(&self, command: LeaveStudyCommand) -> Result<()> {
        with_retry(RetryConfig::default(), || async {
            self.try_execute_once(&command).await
        })
        .await
    }

    async fn try_execute_once(&self, cmd: &LeaveStudyCommand) -> Result<()> {
        let mut study = self
            .study_repo
            .find_by_id(&cmd.study_id, None)
            .await?
            .ok_or_not_found(cmd.study_id)?;

        let account_id = &cmd.account_id;
        if !study.remove_member(account_id, self.clock.now()) {
            tracing::debug!(study_id = %cmd.study_id, account_id = %account_id, "Not a member");
            return Ok(());
        }

        self.tx_manager
            .run_in_transaction(move |tx| {
                let repo = self.study_repo.clone();
                Box::pin(async move { repo.save(&study, Some(tx)).await })
            })
            .await?;

        tracing::info!(study_id = %cmd.study_id, account_id = %account_id, "Member left");
        Ok(())
    }
}
