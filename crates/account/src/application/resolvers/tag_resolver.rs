// crates/account/src/application/resolvers/tag_resolver.rs

use std::sync::Arc;

use shared_kernel::errors::Result;
use shared_kernel::infrastructure::concurrency::Singleflight;

use crate::domain::entities::Tag;
use crate::domain::repositories::TagRepository;
use crate::domain::value_objects::TagTitle;

/// Find-or-create for tags, keyed by title.
///
/// Concurrent first uses inside this process share one creation; races with
/// other processes are settled by the unique constraint plus one re-read.
pub struct TagResolver {
    tag_repo: Arc<dyn TagRepository>,
    flights: Singleflight<TagTitle, Tag>,
}

impl TagResolver {
    pub fn new(tag_repo: Arc<dyn TagRepository>) -> Self {
        Self {
            tag_repo,
            flights: Singleflight::new(),
        }
    }

    pub async fn resolve(&self, title: &TagTitle) -> Result<Tag> {
        if let Some(tag) = self.tag_repo.find_by_title(title).await? {
            return Ok(tag);
        }

        self.flights
            .execute(title.clone(), || self.create(title))
            .await
    }

    async fn create(&self, title: &TagTitle) -> Result<Tag> {
        let tag = Tag::new(title.clone());

        match self.tag_repo.insert(&tag).await {
            Ok(()) => {
                tracing::info!(tag = %title, "Tag created");
                Ok(tag)
            }
            Err(e) if e.is_already_exists() => {
                // Lost the race to another writer: read its row once
                self.tag_repo.find_by_title(title).await?.ok_or(e)
            }
            Err(e) => Err(e),
        }
    }
}
