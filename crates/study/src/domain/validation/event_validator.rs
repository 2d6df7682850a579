// crates/study/src/domain/validation/event_validator.rs

use chrono::{DateTime, Utc};
use shared_kernel::errors::FieldErrors;

use crate::domain::validation::{INVALID_VALUE, WRONG_DATETIME};
use crate::domain::value_objects::{EnrollmentLimit, EventTitle};

/// Used for creation and update alike: enrollment must still be open
/// in the future and the three instants must be ordered.
pub fn validate_event(
    title: &str,
    limit_of_enrollments: i64,
    end_enrollment_at: DateTime<Utc>,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    errors.capture("title", INVALID_VALUE, EventTitle::try_new(title));
    errors.capture(
        "limit_of_enrollments",
        INVALID_VALUE,
        EnrollmentLimit::try_new(limit_of_enrollments),
    );

    if end_enrollment_at <= now {
        errors.reject(
            "end_enrollment_at",
            WRONG_DATETIME,
            "Enrollment must close in the future",
        );
    }
    if start_at < end_enrollment_at {
        errors.reject(
            "start_at",
            WRONG_DATETIME,
            "The event cannot start before enrollment closes",
        );
    }
    if end_at < start_at || end_at < end_enrollment_at {
        errors.reject("end_at", WRONG_DATETIME, "The event cannot end before it starts");
    }

    errors
}
