// crates/study/src/domain/value_objects/event_schedule.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_kernel::errors::{DomainError, Result};

/// Maximum number of accepted enrollments, at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EnrollmentLimit(u32);

impl EnrollmentLimit {
    pub const MIN: u32 = 2;

    pub fn try_new(value: i64) -> Result<Self> {
        if value < Self::MIN as i64 || value > i32::MAX as i64 {
            return Err(DomainError::Validation {
                field: "limit_of_enrollments",
                reason: format!("At least {} enrollments must be allowed", Self::MIN),
            });
        }
        Ok(Self(value as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// The three instants of an event, always ordered:
/// `end_enrollment_at <= start_at <= end_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventSchedule {
    end_enrollment_at: DateTime<Utc>,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
}

impl EventSchedule {
    pub fn try_new(
        end_enrollment_at: DateTime<Utc>,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
    ) -> Result<Self> {
        if start_at < end_enrollment_at {
            return Err(DomainError::Validation {
                field: "start_at",
                reason: "The event cannot start before enrollment closes".into(),
            });
        }
        if end_at < start_at {
            return Err(DomainError::Validation {
                field: "end_at",
                reason: "The event cannot end before it starts".into(),
            });
        }
        Ok(Self {
            end_enrollment_at,
            start_at,
            end_at,
        })
    }

    /// Rebuild from storage, where a check constraint already holds the order
    pub fn from_raw(
        end_enrollment_at: DateTime<Utc>,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
    ) -> Self {
        Self {
            end_enrollment_at,
            start_at,
            end_at,
        }
    }

    pub fn end_enrollment_at(&self) -> DateTime<Utc> {
        self.end_enrollment_at
    }

    pub fn start_at(&self) -> DateTime<Utc> {
        self.start_at
    }

    pub fn end_at(&self) -> DateTime<Utc> {
        self.end_at
    }
}
