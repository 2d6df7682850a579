// crates/account/src/domain/repositories/tag_repository_stub.rs

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Tag;
use crate::domain::repositories::TagRepository;
use crate::domain::value_objects::{TagId, TagTitle};

/// Enforces title uniqueness like the storage constraint does.
#[derive(Default)]
pub struct TagRepositoryStub {
    pub tags: Arc<Mutex<Vec<Tag>>>,
    pub insert_calls: Arc<Mutex<u32>>,
    /// Simulated write latency, widens race windows in concurrency tests
    pub insert_delay: Option<Duration>,
    /// Number of upcoming lookups that miss, as if another process had
    /// committed the row right after we looked
    pub stale_lookups: Arc<Mutex<u32>>,
}

impl TagRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_insert_delay(mut self, delay: Duration) -> Self {
        self.insert_delay = Some(delay);
        self
    }

    pub fn add_tag(&self, tag: Tag) {
        self.tags.lock().unwrap().push(tag);
    }
}

#[async_trait]
impl TagRepository for TagRepositoryStub {
    async fn find_by_title(&self, title: &TagTitle) -> Result<Option<Tag>> {
        {
            let mut stale = self.stale_lookups.lock().unwrap();
            if *stale > 0 {
                *stale -= 1;
                return Ok(None);
            }
        }
        Ok(self.tags.lock().unwrap().iter().find(|t| t.title() == title).cloned())
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> Result<Vec<Tag>> {
        let mut found: Vec<Tag> = self
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|t| ids.contains(t.id()))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.title().cmp(b.title()));
        Ok(found)
    }

    async fn find_all(&self) -> Result<Vec<Tag>> {
        let mut all = self.tags.lock().unwrap().clone();
        all.sort_by(|a, b| a.title().cmp(b.title()));
        Ok(all)
    }

    async fn insert(&self, tag: &Tag) -> Result<()> {
        *self.insert_calls.lock().unwrap() += 1;
        if let Some(delay) = self.insert_delay {
            tokio::time::sleep(delay).await;
        }

        let mut tags = self.tags.lock().unwrap();
        if tags.iter().any(|t| t.title() == tag.title()) {
            return Err(DomainError::AlreadyExists {
                entity: "Tag",
                field: "title",
                value: tag.title().to_string(),
            });
        }
        tags.push(tag.clone());
        Ok(())
    }
}
