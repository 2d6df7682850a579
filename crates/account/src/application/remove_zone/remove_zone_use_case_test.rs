use std::sync::Arc;

use shared_kernel::domain::transaction::StubTxManager;
use shared_kernel::domain::value_objects::AccountId;

use crate::application::add_zone::ZoneForm;
use crate::application::remove_zone::RemoveZoneUseCase;
use crate::domain::entities::{Account, Zone};
use crate::domain::repositories::{AccountRepositoryStub, ZoneRepositoryStub};
use crate::domain::value_objects::{Email, Nickname, PasswordHash};

const ANDONG: &str = "Andong(안동시)/Gyeongsangbuk-do";

fn setup() -> (RemoveZoneUseCase, Arc<AccountRepositoryStub>, AccountId) {
    let accounts = Arc::new(AccountRepositoryStub::new());
    let zones = Arc::new(ZoneRepositoryStub::new());
    let zone = Zone::new(ANDONG.parse().unwrap());
    zones.add_zone(zone.clone());

    let mut account = Account::builder(
        AccountId::new(),
        Nickname::try_new("hyuck9").unwrap(),
        Email::try_new("a@b.com").unwrap(),
        PasswordHash::from_raw("hash"),
    )
    .build();
    account.add_zone(*zone.id());
    let account_id = *account.id();
    accounts.add_account(account);

    (
        RemoveZoneUseCase::new(accounts.clone(), zones, Arc::new(StubTxManager)),
        accounts,
        account_id,
    )
}

#[tokio::test]
async fn test_linked_zone_is_removed() {
    let (use_case, accounts, account_id) = setup();

    let outcome = use_case
        .execute(account_id, ZoneForm { zone_name: ANDONG.into() })
        .await
        .unwrap();

    assert!(outcome.is_accepted());
    assert!(accounts.get(&account_id).unwrap().zones().is_empty());
}

#[tokio::test]
async fn test_unknown_zone_is_a_no_op() {
    let (use_case, accounts, account_id) = setup();

    let outcome = use_case
        .execute(
            account_id,
            ZoneForm {
                zone_name: "Busan(부산광역시)/none".into(),
            },
        )
        .await
        .unwrap();

    assert!(outcome.is_accepted());
    assert_eq!(accounts.get(&account_id).unwrap().zones().len(), 1);
    assert_eq!(*accounts.save_calls.lock().unwrap(), 0);
}
