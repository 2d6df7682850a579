// crates/account/src/infrastructure/postgres/rows/postgres_tag_row.rs

use shared_kernel::domain::Identifier;
use uuid::Uuid;

use crate::domain::entities::Tag;
use crate::domain::value_objects::{TagId, TagTitle};

#[derive(Debug, sqlx::FromRow)]
pub struct PostgresTagRow {
    pub id: Uuid,
    pub title: String,
}

impl From<PostgresTagRow> for Tag {
    fn from(row: PostgresTagRow) -> Self {
        Tag::restore(TagId::from_uuid(row.id), TagTitle::from_raw(row.title))
    }
}
