use std::sync::Arc;

use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::DomainError;

use crate::application::get_account_preferences::GetAccountPreferencesUseCase;
use crate::domain::entities::{Account, Tag, Zone};
use crate::domain::repositories::{AccountRepositoryStub, TagRepositoryStub, ZoneRepositoryStub};
use crate::domain::value_objects::{Email, Nickname, PasswordHash, TagTitle};

#[tokio::test]
async fn test_preferences_list_linked_items_and_whitelists() {
    let accounts = Arc::new(AccountRepositoryStub::new());
    let tags = Arc::new(TagRepositoryStub::new());
    let zones = Arc::new(ZoneRepositoryStub::new());

    let spring = Tag::new(TagTitle::try_new("spring").unwrap());
    let jpa = Tag::new(TagTitle::try_new("jpa").unwrap());
    tags.add_tag(spring.clone());
    tags.add_tag(jpa.clone());
    let seoul = Zone::new("Seoul(서울특별시)/none".parse().unwrap());
    let andong = Zone::new("Andong(안동시)/Gyeongsangbuk-do".parse().unwrap());
    zones.add_zone(seoul.clone());
    zones.add_zone(andong.clone());

    let mut account = Account::builder(
        AccountId::new(),
        Nickname::try_new("hyuck9").unwrap(),
        Email::try_new("a@b.com").unwrap(),
        PasswordHash::from_raw("hash"),
    )
    .build();
    account.add_tag(*spring.id());
    account.add_zone(*seoul.id());
    let account_id = *account.id();
    accounts.add_account(account);

    let use_case = GetAccountPreferencesUseCase::new(accounts, tags, zones);
    let prefs = use_case.execute(account_id).await.unwrap();

    assert_eq!(prefs.tags, vec!["spring"]);
    assert_eq!(prefs.zones, vec!["Seoul(서울특별시)/none"]);
    assert_eq!(prefs.tag_whitelist, vec!["jpa", "spring"]);
    assert_eq!(
        prefs.zone_whitelist,
        vec!["Andong(안동시)/Gyeongsangbuk-do", "Seoul(서울특별시)/none"]
    );
}

#[tokio::test]
async fn test_unknown_account_is_not_found() {
    let use_case = GetAccountPreferencesUseCase::new(
        Arc::new(AccountRepositoryStub::new()),
        Arc::new(TagRepositoryStub::new()),
        Arc::new(ZoneRepositoryStub::new()),
    );

    let result = use_case.execute(AccountId::new()).await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}
