use chrono::{Duration, TimeZone, Utc};
use shared_kernel::domain::value_objects::AccountId;

use crate::domain::entities::Study;
use crate::domain::repositories::StudyRepositoryStub;
use crate::domain::validation::{WRONG_DATETIME, WRONG_PATH, validate_event, validate_study};
use crate::domain::value_objects::{FullDescription, ShortDescription, StudyPath, StudyTitle};

#[tokio::test]
async fn test_taken_path_is_rejected() {
    let repo = StudyRepositoryStub::new();
    repo.add_study(Study::create(
        StudyPath::try_new("spring").unwrap(),
        StudyTitle::try_new("Spring").unwrap(),
        ShortDescription::try_new("short").unwrap(),
        FullDescription::try_new("full").unwrap(),
        AccountId::new(),
        Utc::now(),
    ));

    let errors = validate_study(&repo, "spring", "Another", "short", "full").await.unwrap();

    let error = errors.for_field("path").next().unwrap();
    assert_eq!(error.code, WRONG_PATH);
    assert_eq!(errors.len(), 1);
}

#[tokio::test]
async fn test_every_bad_field_is_reported() {
    let repo = StudyRepositoryStub::new();

    let errors = validate_study(&repo, "A", "", "", " ").await.unwrap();

    for field in ["path", "title", "short_description", "full_description"] {
        assert!(errors.has_field(field), "{} should be rejected", field);
    }
}

#[test]
fn test_valid_event_form() {
    let now = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
    let close = now + Duration::days(3);

    let errors = validate_event("Kick-off", 10, close, close, close + Duration::hours(2), now);

    assert!(errors.is_empty(), "{:?}", errors);
}

#[test]
fn test_start_before_enrollment_close_is_rejected() {
    let now = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
    let close = now + Duration::days(3);

    let errors = validate_event(
        "Kick-off",
        10,
        close,
        close - Duration::hours(1),
        close + Duration::hours(2),
        now,
    );

    assert_eq!(errors.for_field("start_at").next().unwrap().code, WRONG_DATETIME);
    assert!(!errors.has_field("end_at"));
}

#[test]
fn test_enrollment_closing_in_the_past_and_small_limit_are_rejected() {
    let now = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
    let close = now - Duration::minutes(1);

    let errors = validate_event("Kick-off", 1, close, now, now + Duration::hours(1), now);

    assert!(errors.has_field("end_enrollment_at"));
    assert!(errors.has_field("limit_of_enrollments"));
}
