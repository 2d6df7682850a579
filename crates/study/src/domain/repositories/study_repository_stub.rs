// crates/study/src/domain/repositories/study_repository_stub.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Study;
use crate::domain::repositories::StudyRepository;
use crate::domain::value_objects::{StudyId, StudyPath};

#[derive(Default)]
pub struct StudyRepositoryStub {
    pub studies: Arc<Mutex<HashMap<StudyId, Study>>>,
    /// Returned by the next `save` calls, consumed one by one
    pub save_errors: Arc<Mutex<Vec<DomainError>>>,
    pub save_calls: Arc<Mutex<u32>>,
}

impl StudyRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_study(&self, study: Study) {
        self.studies.lock().unwrap().insert(*study.id(), study);
    }

    pub fn get(&self, id: &StudyId) -> Option<Study> {
        self.studies.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl StudyRepository for StudyRepositoryStub {
    async fn find_by_id(&self, id: &StudyId, _tx: Option<&mut dyn Transaction>) -> Result<Option<Study>> {
        Ok(self.get(id))
    }

    async fn find_by_path(&self, path: &StudyPath) -> Result<Option<Study>> {
        Ok(self
            .studies
            .lock()
            .unwrap()
            .values()
            .find(|s| s.path() == path)
            .cloned())
    }

    async fn exists_by_path(&self, path: &StudyPath) -> Result<bool> {
        Ok(self.studies.lock().unwrap().values().any(|s| s.path() == path))
    }

    async fn save(&self, study: &Study, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        *self.save_calls.lock().unwrap() += 1;

        let queued = {
            let mut errors = self.save_errors.lock().unwrap();
            if errors.is_empty() { None } else { Some(errors.remove(0)) }
        };
        if let Some(err) = queued {
            return Err(err);
        }

        let mut studies = self.studies.lock().unwrap();
        if studies
            .values()
            .any(|s| s.path() == study.path() && s.id() != study.id())
        {
            return Err(DomainError::AlreadyExists {
                entity: "Study",
                field: "path",
                value: study.path().to_string(),
            });
        }
        studies.insert(*study.id(), study.clone());
        Ok(())
    }
}
