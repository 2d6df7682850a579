// crates/study/src/application/create_event/event_form.rs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared_kernel::errors::{FieldErrors, Result};

use crate::domain::entities::EventDraft;
use crate::domain::validation::validate_event;
use crate::domain::value_objects::{EnrollmentLimit, EventSchedule, EventTitle, EventType};

/// Shared by creation and update. `event_type` only matters on creation.
#[derive(Debug, Clone, Deserialize)]
pub struct EventForm {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub event_type: EventType,
    pub limit_of_enrollments: i64,
    pub end_enrollment_at: DateTime<Utc>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl EventForm {
    pub(crate) fn validate(&self, now: DateTime<Utc>) -> FieldErrors {
        validate_event(
            &self.title,
            self.limit_of_enrollments,
            self.end_enrollment_at,
            self.start_at,
            self.end_at,
            now,
        )
    }

    pub(crate) fn to_draft(&self) -> Result<EventDraft> {
        Ok(EventDraft {
            title: EventTitle::try_new(self.title.as_str())?,
            description: self.description.clone(),
            limit_of_enrollments: EnrollmentLimit::try_new(self.limit_of_enrollments)?,
            schedule: EventSchedule::try_new(self.end_enrollment_at, self.start_at, self.end_at)?,
        })
    }
}
