// crates/study/src/domain/value_objects/event_type.rs

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared_kernel::errors::DomainError;

/// How enrollments get accepted. Fixed once the event exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// Accepted in arrival order up to the limit
    FirstComeFirstServed,
    /// Every enrollment waits for a manager's approval
    ConfirmativeOnly,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::FirstComeFirstServed => "FIRST_COME_FIRST_SERVED",
            EventType::ConfirmativeOnly => "CONFIRMATIVE_ONLY",
        }
    }
}

impl FromStr for EventType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIRST_COME_FIRST_SERVED" => Ok(EventType::FirstComeFirstServed),
            "CONFIRMATIVE_ONLY" => Ok(EventType::ConfirmativeOnly),
            other => Err(DomainError::Validation {
                field: "event_type",
                reason: format!("Unknown event type '{}'", other),
            }),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
