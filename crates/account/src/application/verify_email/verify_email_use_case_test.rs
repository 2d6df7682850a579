use std::sync::Arc;

use chrono::{TimeZone, Utc};
use shared_kernel::clock::{Clock, FixedClock};
use shared_kernel::domain::aggregates::AggregateRoot;
use shared_kernel::domain::transaction::StubTxManager;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::DomainError;

use crate::application::verify_email::{VerifyEmailCommand, VerifyEmailUseCase};
use crate::domain::entities::Account;
use crate::domain::repositories::AccountRepositoryStub;
use crate::domain::value_objects::{Email, Nickname, PasswordHash};

fn setup() -> (VerifyEmailUseCase, Arc<AccountRepositoryStub>, Account) {
    let repo = Arc::new(AccountRepositoryStub::new());
    let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap()));

    let mut account = Account::builder(
        AccountId::new(),
        Nickname::try_new("hyuck9").unwrap(),
        Email::try_new("hyuck9@email.com").unwrap(),
        PasswordHash::from_raw("hash"),
    )
    .build();
    account.generate_email_check_token(clock.now());
    repo.add_account(account.clone());

    let use_case = VerifyEmailUseCase::new(repo.clone(), Arc::new(StubTxManager), clock);
    (use_case, repo, account)
}

#[tokio::test]
async fn test_right_token_verifies_and_sets_joined_at() {
    let (use_case, repo, account) = setup();
    let token = account.email_check_token().unwrap().as_str().to_string();

    let verified = use_case
        .execute(VerifyEmailCommand {
            email: "hyuck9@email.com".into(),
            token,
        })
        .await
        .unwrap();

    assert!(verified.is_email_verified());
    assert_eq!(
        verified.joined_at(),
        Some(Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap())
    );
    let saved = repo.get(account.id()).unwrap();
    assert!(saved.is_email_verified());
    assert_eq!(saved.version(), account.version() + 1);
}

#[tokio::test]
async fn test_wrong_token_is_rejected() {
    let (use_case, repo, account) = setup();

    let result = use_case
        .execute(VerifyEmailCommand {
            email: "hyuck9@email.com".into(),
            token: "forged".into(),
        })
        .await;

    assert!(matches!(result, Err(DomainError::Validation { field: "token", .. })));
    assert!(!repo.get(account.id()).unwrap().is_email_verified());
}

#[tokio::test]
async fn test_unknown_email_is_rejected() {
    let (use_case, _, _) = setup();

    let result = use_case
        .execute(VerifyEmailCommand {
            email: "nobody@email.com".into(),
            token: "whatever".into(),
        })
        .await;

    assert!(matches!(result, Err(DomainError::Validation { field: "email", .. })));
}
