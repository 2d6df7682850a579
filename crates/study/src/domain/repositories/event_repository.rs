// crates/study/src/domain/repositories/event_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

use crate::domain::entities::Event;
use crate::domain::value_objects::{EventId, StudyId};

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, id: &EventId, tx: Option<&mut dyn Transaction>) -> Result<Option<Event>>;

    /// Events of one study, earliest start first
    async fn find_by_study(&self, study_id: &StudyId) -> Result<Vec<Event>>;

    async fn save(&self, event: &Event, tx: Option<&mut dyn Transaction>) -> Result<()>;
}
