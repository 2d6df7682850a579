// crates/study/src/domain/repositories/study_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

use crate::domain::entities::Study;
use crate::domain::value_objects::{StudyId, StudyPath};

/// Persistence port for studies, manager and member sets included.
#[async_trait]
pub trait StudyRepository: Send + Sync {
    async fn find_by_id(&self, id: &StudyId, tx: Option<&mut dyn Transaction>) -> Result<Option<Study>>;

    async fn find_by_path(&self, path: &StudyPath) -> Result<Option<Study>>;

    async fn exists_by_path(&self, path: &StudyPath) -> Result<bool>;

    /// Same contract as account saves: insert when new, otherwise an
    /// optimistic update that fails with `ConcurrencyConflict`.
    async fn save(&self, study: &Study, tx: Option<&mut dyn Transaction>) -> Result<()>;
}
