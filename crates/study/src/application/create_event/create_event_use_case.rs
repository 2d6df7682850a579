// crates/study/src/application/create_event/create_event_use_case.rs

use std::sync::Arc;

use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{Result, Submission};

use crate::application::authorization::require_manager;
use crate::application::create_event::EventForm;
use crate::domain::entities::Event;
use crate::domain::repositories::{EventRepository, StudyRepository};
use crate::domain::value_objects::{EventId, StudyId};

pub struct CreateEventUseCase {
    study_repo: Arc<dyn StudyRepository>,
    event_repo: Arc<dyn EventRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    clock: Arc<dyn Clock>,
}

impl CreateEventUseCase {
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

    /// Managers only. The acting account is recorded as `created_by`.
    pub async fn execute(
        &self,
        account_id: AccountId,
        study_id: StudyId,
        form: EventForm,
    ) -> Result<Submission<EventId>> {
        let study = self
            .study_repo
            .find_by_id(&study_id, None)
            .await?
            .ok_or_not_found(study_id)?;
        require_manager(&study, &account_id)?;

        let now = self.clock.now();
        let errors = form.validate(now);

        Submission::guard(errors, || async {
            let event = Event::create(study_id, account_id, form.event_type, form.to_draft()?, now);
            let event_id = *event.id();

            self.tx_manager
                .run_in_transaction(move |tx| {
                    let repo = self.event_repo.clone();
                    Box::pin(async move { repo.save(&event, Some(tx)).await })
                })
                .await?;

            tracing::info!(event_id = %event_id, study_id = %study_id, "Event created");
            Ok(event_id)
        })
        .await
    }
}
