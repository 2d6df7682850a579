use std::sync::Arc;
use std::time::Duration;

use shared_kernel::errors::DomainError;

use crate::application::resolvers::{TagResolver, ZoneResolver};
use crate::domain::entities::Tag;
use crate::domain::repositories::{TagRepositoryStub, ZoneRepositoryStub};
use crate::domain::value_objects::{TagTitle, ZoneLabel};

fn title(raw: &str) -> TagTitle {
    TagTitle::try_new(raw).unwrap()
}

#[tokio::test]
async fn test_existing_tag_is_returned_without_insert() {
    let repo = Arc::new(TagRepositoryStub::new());
    let existing = Tag::new(title("rust"));
    repo.add_tag(existing.clone());
    let resolver = TagResolver::new(repo.clone());

    let resolved = resolver.resolve(&title("rust")).await.unwrap();

    assert_eq!(resolved, existing);
    assert_eq!(*repo.insert_calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_unknown_tag_is_created_once() {
    let repo = Arc::new(TagRepositoryStub::new());
    let resolver = TagResolver::new(repo.clone());

    let first = resolver.resolve(&title("spring")).await.unwrap();
    let second = resolver.resolve(&title("spring")).await.unwrap();

    assert_eq!(first.id(), second.id());
    assert_eq!(repo.tags.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_first_use_yields_one_row() {
    let repo = Arc::new(TagRepositoryStub::new().with_insert_delay(Duration::from_millis(30)));
    let resolver = Arc::new(TagResolver::new(repo.clone()));

    let mut handles = Vec::new();
    for _ in 0..10 {
        let resolver = resolver.clone();
        handles.push(tokio::spawn(async move { resolver.resolve(&title("jpa")).await }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(*handle.await.unwrap().unwrap().id());
    }

    ids.dedup();
    assert_eq!(ids.len(), 1, "Every caller sees the same tag");
    assert_eq!(repo.tags.lock().unwrap().len(), 1);
    assert_eq!(*repo.insert_calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_lost_race_rereads_the_winner() {
    let repo = Arc::new(TagRepositoryStub::new());
    let winner = Tag::new(title("kotlin"));
    repo.add_tag(winner.clone());
    // First lookup misses as if the other process committed just after it
    *repo.stale_lookups.lock().unwrap() = 1;
    let resolver = TagResolver::new(repo.clone());

    let resolved = resolver.resolve(&title("kotlin")).await.unwrap();

    assert_eq!(resolved, winner);
    assert_eq!(*repo.insert_calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_already_exists_surfaces_when_reread_still_misses() {
    let repo = Arc::new(TagRepositoryStub::new());
    repo.add_tag(Tag::new(title("ghost")));
    *repo.stale_lookups.lock().unwrap() = 2;
    let resolver = TagResolver::new(repo.clone());

    let result = resolver.resolve(&title("ghost")).await;

    assert!(matches!(result, Err(DomainError::AlreadyExists { entity: "Tag", .. })));
}

#[tokio::test]
async fn test_concurrent_zone_resolution_yields_same_identity() {
    let repo = Arc::new(ZoneRepositoryStub::new().with_insert_delay(Duration::from_millis(30)));
    let resolver = Arc::new(ZoneResolver::new(repo.clone()));
    let label: ZoneLabel = "Andong(안동시)/Gyeongsangbuk-do".parse().unwrap();

    let (a, b) = tokio::join!(resolver.resolve(&label), resolver.resolve(&label));

    assert_eq!(a.unwrap().id(), b.unwrap().id());
    assert_eq!(repo.zones.lock().unwrap().len(), 1);
}
