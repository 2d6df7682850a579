// crates/study/src/application/update_event/update_event_use_case.rs

use std::sync::Arc;

use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{Result, Submission};
use shared_kernel::infrastructure::{RetryConfig, with_retry};

use crate::application::authorization::require_manager;
use crate::application::create_event::EventForm;
use crate::domain::entities::EventDraft;
use crate::domain::repositories::{EventRepository, StudyRepository};
use crate::domain::value_objects::EventId;

/// Replaces title, description, limit and schedule. The event's type,
/// author and study are kept whatever the form says.
pub struct UpdateEventUseCase {
    study_repo: Arc<dyn StudyRepository>,
    event_repo: Arc<dyn EventRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    clock: Arc<dyn Clock>,
}

impl UpdateEventUseCase {
    pub fn new(
        study_repo: Arc<dyn StudyRepository>,
        event_repo: Arc<dyn EventRepository>,
        tx_manager: Arc<dyn TransactionManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            study_repo,
            event_repo,
            tx_manager,
            clock,
        }
    }

    pub async fn execute(
        &self,
        account_id: AccountId,
        event_id: EventId,
        form: EventForm,
    ) -> Result<Submission<()>> {
        let event = self
            .event_repo
            .find_by_id(&event_id, None)
            .await?
            .ok_or_not_found(event_id)?;
        let study = self
            .study_repo
            .find_by_id(event.study_id(), None)
            .await?
            .ok_or_not_found(event.study_id())?;
        require_manager(&study, &account_id)?;

        let errors = form.validate(self.clock.now());

        Submission::guard(errors, || async {
            let draft = form.to_draft()?;
            with_retry(RetryConfig::default(), || async {
                self.try_execute_once(&event_id, &draft).await
            })
            .await
        })
        .await
    }

    async fn try_execute_once(&self, event_id: &EventId, draft: &EventDraft) -> Result<()> {
        let mut event = self
            .event_repo
            .find_by_id(event_id, None)
            .await?
            .ok_or_not_found(event_id)?;

        event.update(draft.clone(), self.clock.now());

        self.tx_manager
            .run_in_transaction(move |tx| {
                let repo = self.event_repo.clone();
                Box::pin(async move { repo.save(&event, Some(tx)).await })
            })
            .await
    }
}
