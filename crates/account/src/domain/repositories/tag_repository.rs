// crates/account/src/domain/repositories/tag_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::Tag;
use crate::domain::value_objects::{TagId, TagTitle};

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_title(&self, title: &TagTitle) -> Result<Option<Tag>>;

    async fn find_by_ids(&self, ids: &[TagId]) -> Result<Vec<Tag>>;

    /// Every known tag, ordered by title
    async fn find_all(&self) -> Result<Vec<Tag>>;

    /// Fails with `AlreadyExists` when the title is taken
    async fn insert(&self, tag: &Tag) -> Result<()>;
}
