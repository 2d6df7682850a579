// crates/study/src/domain/entities/event.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::aggregates::{AggregateMetadata, AggregateRoot};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::AccountId;

use crate::domain::value_objects::{
    EnrollmentLimit, EventId, EventSchedule, EventTitle, EventType, StudyId,
};

/// Editable part of an event, validated as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: EventTitle,
    pub description: Option<String>,
    pub limit_of_enrollments: EnrollmentLimit,
    pub schedule: EventSchedule,
}

/// A dated gathering of a study.
///
/// `study_id`, `created_by` and `event_type` are set at creation and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub(crate) id: EventId,
    pub(crate) study_id: StudyId,
    pub(crate) created_by: AccountId,
    pub(crate) event_type: EventType,
    pub(crate) title: EventTitle,
    pub(crate) description: Option<String>,
    pub(crate) limit_of_enrollments: EnrollmentLimit,
    pub(crate) schedule: EventSchedule,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) metadata: AggregateMetadata,
}

impl Event {
    pub fn create(
        study_id: StudyId,
        created_by: AccountId,
        event_type: EventType,
        draft: EventDraft,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EventId::new(),
            study_id,
            created_by,
            event_type,
            title: draft.title,
            description: normalize_description(draft.description),
            limit_of_enrollments: draft.limit_of_enrollments,
            schedule: draft.schedule,
            created_at: now,
            updated_at: now,
            metadata: AggregateMetadata::default(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: EventId,
        study_id: StudyId,
        created_by: AccountId,
        event_type: EventType,
        draft: EventDraft,
        version: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            study_id,
            created_by,
            event_type,
            title: draft.title,
            description: draft.description,
            limit_of_enrollments: draft.limit_of_enrollments,
            schedule: draft.schedule,
            created_at,
            updated_at,
            metadata: AggregateMetadata::restore(version),
        }
    }

    /// Full replace of the editable fields
    pub fn update(&mut self, draft: EventDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.description = normalize_description(draft.description);
        self.limit_of_enrollments = draft.limit_of_enrollments;
        self.schedule = draft.schedule;
        self.increment_version();
        self.updated_at = now;
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn study_id(&self) -> &StudyId {
        &self.study_id
    }

    pub fn created_by(&self) -> &AccountId {
        &self.created_by
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn title(&self) -> &EventTitle {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn limit_of_enrollments(&self) -> EnrollmentLimit {
        self.limit_of_enrollments
    }

    pub fn schedule(&self) -> &EventSchedule {
        &self.schedule
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.trim().is_empty())
}

impl EntityMetadata for Event {
    fn entity_name() -> &'static str {
        "Event"
    }
}

impl AggregateRoot for Event {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn metadata(&self) -> &AggregateMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut AggregateMetadata {
        &mut self.metadata
    }
}
