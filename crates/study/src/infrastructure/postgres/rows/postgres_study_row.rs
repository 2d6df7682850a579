// crates/study/src/infrastructure/postgres/rows/postgres_study_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::Identifier;
use shared_kernel::domain::aggregates::AggregateRoot;
use shared_kernel::domain::value_objects::AccountId;
use uuid::Uuid;

use crate::domain::entities::Study;
use crate::domain::value_objects::{
    FullDescription, ShortDescription, StudyId, StudyPath, StudyTitle,
};

#[derive(Debug, sqlx::FromRow)]
pub struct PostgresStudyRow {
    pub id: Uuid,
    pub path: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub manager_ids: Vec<Uuid>,
    pub member_ids: Vec<Uuid>,
}

impl From<PostgresStudyRow> for Study {
    fn from(row: PostgresStudyRow) -> Self {
        Study::restore(
            StudyId::from_uuid(row.id),
            StudyPath::from_raw(row.path),
            StudyTitle::from_raw(row.title),
            ShortDescription::from_raw(row.short_description),
            FullDescription::from_raw(row.full_description),
            row.manager_ids.into_iter().map(AccountId::from_uuid).collect(),
            row.member_ids.into_iter().map(AccountId::from_uuid).collect(),
            row.version,
            row.created_at,
            row.updated_at,
        )
    }
}

impl From<&Study> for PostgresStudyRow {
    fn from(s: &Study) -> Self {
        Self {
            id: s.id().as_uuid(),
            path: s.path().as_str().to_string(),
            title: s.title().as_str().to_string(),
            short_description: s.short_description().as_str().to_string(),
            full_description: s.full_description().as_str().to_string(),
            version: s.version(),
            created_at: s.created_at(),
            updated_at: s.updated_at(),
            manager_ids: s.managers().iter().map(|id| id.as_uuid()).collect(),
            member_ids: s.members().iter().map(|id| id.as_uuid()).collect(),
        }
    }
}
