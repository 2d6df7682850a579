// crates/account/src/domain/entities/tag.rs

use serde::Serialize;
use shared_kernel::domain::entities::EntityMetadata;

use crate::domain::value_objects::{TagId, TagTitle};

/// Interest keyword shared by every account that picked it.
/// Created on first use and never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    id: TagId,
    title: TagTitle,
}

impl Tag {
    pub fn new(title: TagTitle) -> Self {
        Self {
            id: TagId::new(),
            title,
        }
    }

    pub fn restore(id: TagId, title: TagTitle) -> Self {
        Self { id, title }
    }

    pub fn id(&self) -> &TagId {
        &self.id
    }

    pub fn title(&self) -> &TagTitle {
        &self.title
    }
}

impl EntityMetadata for Tag {
    fn entity_name() -> &'static str {
        "Tag"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "tags_title_key" => "title",
            _ => "unique_constraint",
        }
    }
}
