// crates/study/src/domain/repositories/event_repository_stub.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

use crate::domain::entities::Event;
use crate::domain::repositories::EventRepository;
use crate::domain::value_objects::{EventId, StudyId};

#[derive(Default)]
pub struct EventRepositoryStub {
    pub events: Arc<Mutex<HashMap<EventId, Event>>>,
}

impl EventRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&self, event: Event) {
        self.events.lock().unwrap().insert(*event.id(), event);
    }

    pub fn get(&self, id: &EventId) -> Option<Event> {
        self.events.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl EventRepository for EventRepositoryStub {
    async fn find_by_id(&self, id: &EventId, _tx: Option<&mut dyn Transaction>) -> Result<Option<Event>> {
        Ok(self.get(id))
    }

    async fn find_by_study(&self, study_id: &StudyId) -> Result<Vec<Event>> {
        let mut found: Vec<Event> = self
            .events
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.study_id() == study_id)
            .cloned()
            .collect();
        found.sort_by_key(|e| e.schedule().start_at());
        Ok(found)
    }

    async fn save(&self, event: &Event, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        self.add_event(event.clone());
        Ok(())
    }
}
