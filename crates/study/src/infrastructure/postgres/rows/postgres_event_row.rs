// crates/study/src/infrastructure/postgres/rows/postgres_event_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::Identifier;
use shared_kernel::domain::aggregates::AggregateRoot;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::DomainError;
use uuid::Uuid;

use crate::domain::entities::{Event, EventDraft};
use crate::domain::value_objects::{
    EnrollmentLimit, EventId, EventSchedule, EventTitle, EventType, StudyId,
};

#[derive(Debug, sqlx::FromRow)]
pub struct PostgresEventRow {
    pub id: Uuid,
    pub study_id: Uuid,
    pub created_by: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub event_type: String,
    pub limit_of_enrollments: i32,
    pub end_enrollment_at: DateTime<Utc>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PostgresEventRow> for Event {
    type Error = DomainError;

    fn try_from(row: PostgresEventRow) -> Result<Self, Self::Error> {
        let event_type: EventType = row.event_type.parse()?;
        let draft = EventDraft {
            title: EventTitle::from_raw(row.title),
            description: row.description,
            limit_of_enrollments: EnrollmentLimit::try_new(i64::from(row.limit_of_enrollments))?,
            schedule: EventSchedule::from_raw(row.end_enrollment_at, row.start_at, row.end_at),
        };

        Ok(Event::restore(
            EventId::from_uuid(row.id),
            StudyId::from_uuid(row.study_id),
            AccountId::from_uuid(row.created_by),
            event_type,
            draft,
            row.version,
            row.created_at,
            row.updated_at,
        ))
    }
}

impl From<&Event> for PostgresEventRow {
    fn from(e: &Event) -> Self {
        let schedule = e.schedule();
        Self {
            id: e.id().as_uuid(),
            study_id: e.study_id().as_uuid(),
            created_by: e.created_by().as_uuid(),
            title: e.title().as_str().to_string(),
            description: e.description().map(str::to_string),
            event_type: e.event_type().as_str().to_string(),
            limit_of_enrollments: e.limit_of_enrollments().value() as i32,
            end_enrollment_at: schedule.end_enrollment_at(),
            start_at: schedule.start_at(),
            end_at: schedule.end_at(),
            version: e.version(),
            created_at: e.created_at(),
            updated_at: e.updated_at(),
        }
    }
}
