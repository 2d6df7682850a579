use std::sync::Arc;

use shared_kernel::domain::aggregates::AggregateRoot;
use shared_kernel::domain::transaction::StubTxManager;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{DomainError, Submission};

use crate::application::change_nickname::{ChangeNicknameUseCase, NicknameForm};
use crate::domain::entities::Account;
use crate::domain::repositories::AccountRepositoryStub;
use crate::domain::validation::{INVALID_NICKNAME, WRONG_VALUE};
use crate::domain::value_objects::{Email, Nickname, PasswordHash};

fn account(nickname: &str, email: &str) -> Account {
    Account::builder(
        AccountId::new(),
        Nickname::try_new(nickname).unwrap(),
        Email::try_new(email).unwrap(),
        PasswordHash::from_raw("hash"),
    )
    .build()
}

fn setup() -> (ChangeNicknameUseCase, Arc<AccountRepositoryStub>) {
    let repo = Arc::new(AccountRepositoryStub::new());
    let use_case = ChangeNicknameUseCase::new(repo.clone(), Arc::new(StubTxManager));
    (use_case, repo)
}

fn form(nickname: &str) -> NicknameForm {
    NicknameForm {
        nickname: nickname.into(),
    }
}

#[tokio::test]
async fn test_change_nickname_success() {
    let (use_case, repo) = setup();
    let me = account("hyuck9", "a@b.com");
    let id = *me.id();
    repo.add_account(me);

    let outcome = use_case.execute(id, form("newname")).await.unwrap();

    assert_eq!(outcome, Submission::Accepted(()));
    let saved = repo.get(&id).unwrap();
    assert_eq!(saved.nickname().as_str(), "newname");
    assert_eq!(saved.version(), 2);
}

#[tokio::test]
async fn test_taking_another_accounts_nickname_leaves_both_unchanged() {
    let (use_case, repo) = setup();
    let a = account("alice", "a@b.com");
    let b = account("bob", "b@b.com");
    let (a_id, b_id) = (*a.id(), *b.id());
    repo.add_account(a);
    repo.add_account(b);

    let outcome = use_case.execute(a_id, form("bob")).await.unwrap();

    let error = outcome.errors().unwrap().for_field("nickname").next().unwrap().clone();
    assert_eq!(error.code, WRONG_VALUE);
    assert_eq!(repo.get(&a_id).unwrap().nickname().as_str(), "alice");
    assert_eq!(repo.get(&b_id).unwrap().nickname().as_str(), "bob");
    assert_eq!(*repo.save_calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_resubmitting_own_nickname_is_accepted_without_write() {
    let (use_case, repo) = setup();
    let me = account("hyuck9", "a@b.com");
    let id = *me.id();
    repo.add_account(me);

    let outcome = use_case.execute(id, form("hyuck9")).await.unwrap();

    assert!(outcome.is_accepted());
    assert_eq!(*repo.save_calls.lock().unwrap(), 0);
    assert_eq!(repo.get(&id).unwrap().version(), 1);
}

#[tokio::test]
async fn test_shrug_nickname_fails_validation() {
    let (use_case, repo) = setup();
    let me = account("hyuck9", "a@b.com");
    let id = *me.id();
    repo.add_account(me);

    let outcome = use_case.execute(id, form("¯\\_(ツ)_/¯")).await.unwrap();

    assert_eq!(
        outcome.errors().unwrap().for_field("nickname").next().unwrap().code,
        INVALID_NICKNAME
    );
    assert_eq!(repo.get(&id).unwrap().nickname().as_str(), "hyuck9");
}

#[tokio::test]
async fn test_version_conflicts_are_retried() {
    let (use_case, repo) = setup();
    let me = account("hyuck9", "a@b.com");
    let id = *me.id();
    repo.add_account(me);
    repo.save_errors.lock().unwrap().push(DomainError::ConcurrencyConflict {
        reason: "version moved".into(),
    });

    let outcome = use_case.execute(id, form("retried")).await.unwrap();

    assert!(outcome.is_accepted());
    assert_eq!(*repo.save_calls.lock().unwrap(), 2);
    assert_eq!(repo.get(&id).unwrap().nickname().as_str(), "retried");
}

#[tokio::test]
async fn test_unique_violation_at_save_is_not_retried() {
    let (use_case, repo) = setup();
    let me = account("hyuck9", "a@b.com");
    let id = *me.id();
    repo.add_account(me);
    repo.save_errors.lock().unwrap().push(DomainError::AlreadyExists {
        entity: "Account",
        field: "nickname",
        value: "already taken".into(),
    });

    let result = use_case.execute(id, form("raced")).await;

    assert!(matches!(result, Err(DomainError::AlreadyExists { field: "nickname", .. })));
    assert_eq!(*repo.save_calls.lock().unwrap(), 1);
}
