use crate::domain::value_objects::ZoneLabel;
use shared_kernel::errors::DomainError;

#[test]
fn test_zone_label_parses_and_formats() {
    let label: ZoneLabel = "Andong(안동시)/Gyeongsangbuk-do".parse().unwrap();

    assert_eq!(label.city.as_str(), "Andong");
    assert_eq!(label.local_name_of_city.as_str(), "안동시");
    assert_eq!(label.province.as_str(), "Gyeongsangbuk-do");
    assert_eq!(label.to_string(), "Andong(안동시)/Gyeongsangbuk-do");
}

#[test]
fn test_zone_label_rejects_malformed_input() {
    for raw in ["Andong", "Andong(안동시)", "Andong/Gyeongsangbuk-do", "(안동시)/Gyeongsangbuk-do"] {
        assert!(
            matches!(raw.parse::<ZoneLabel>(), Err(DomainError::Validation { .. })),
            "Should be rejected: {}",
            raw
        );
    }
}
