use shared_kernel::domain::entities::EntityMetadata;

use crate::domain::entities::{Account, Tag, Zone};
use crate::domain::value_objects::{TagTitle, ZoneLabel};

#[test]
fn test_zone_display_matches_label_format() {
    let label: ZoneLabel = "Seoul(서울특별시)/none".parse().unwrap();
    let zone = Zone::new(label.clone());

    assert_eq!(zone.to_string(), "Seoul(서울특별시)/none");
    assert_eq!(zone.label(), label);
}

#[test]
fn test_unique_constraints_map_to_form_fields() {
    assert_eq!(Account::map_constraint_to_field("accounts_nickname_key"), "nickname");
    assert_eq!(Account::map_constraint_to_field("accounts_email_key"), "email");
    assert_eq!(Tag::map_constraint_to_field("tags_title_key"), "title");
    assert_eq!(Zone::map_constraint_to_field("zones_city_province_key"), "zone_name");
    assert_eq!(Zone::map_constraint_to_field("whatever"), "unique_constraint");
}

#[test]
fn test_new_tags_get_distinct_ids() {
    let a = Tag::new(TagTitle::try_new("rust").unwrap());
    let b = Tag::new(TagTitle::try_new("rust").unwrap());
    assert_ne!(a.id(), b.id());
    assert_eq!(a.title(), b.title());
}
