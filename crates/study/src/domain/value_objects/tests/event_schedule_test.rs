use chrono::{Duration, TimeZone, Utc};
use shared_kernel::errors::DomainError;

use crate::domain::value_objects::{EnrollmentLimit, EventSchedule, EventType};

#[test]
fn test_ordered_schedule_is_accepted() {
    let close = Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap();
    let schedule = EventSchedule::try_new(close, close, close + Duration::hours(2)).unwrap();
    assert_eq!(schedule.start_at(), close);
}

#[test]
fn test_start_before_enrollment_close_is_rejected() {
    let close = Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap();
    let result = EventSchedule::try_new(close, close - Duration::minutes(1), close + Duration::hours(1));
    assert!(matches!(result, Err(DomainError::Validation { field: "start_at", .. })));
}

#[test]
fn test_end_before_start_is_rejected() {
    let close = Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap();
    let result = EventSchedule::try_new(close, close + Duration::hours(2), close + Duration::hours(1));
    assert!(matches!(result, Err(DomainError::Validation { field: "end_at", .. })));
}

#[test]
fn test_enrollment_limit_minimum() {
    assert!(EnrollmentLimit::try_new(1).is_err());
    assert!(EnrollmentLimit::try_new(-3).is_err());
    assert_eq!(EnrollmentLimit::try_new(2).unwrap().value(), 2);
}

#[test]
fn test_event_type_round_trips_through_its_name() {
    for ty in [EventType::FirstComeFirstServed, EventType::ConfirmativeOnly] {
        assert_eq!(ty.as_str().parse::<EventType>().unwrap(), ty);
    }
    assert!("FCFS".parse::<EventType>().is_err());
}
