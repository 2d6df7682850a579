use std::sync::Arc;

use chrono::Duration;
use shared_kernel::clock::{Clock, FixedClock};
use shared_kernel::domain::transaction::StubTxManager;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::DomainError;

use crate::application::resend_confirmation_email::{
    ResendConfirmationEmailCommand, ResendConfirmationEmailUseCase,
};
use crate::domain::entities::Account;
use crate::domain::ports::VerificationNotifierStub;
use crate::domain::repositories::AccountRepositoryStub;
use crate::domain::value_objects::{Email, Nickname, PasswordHash};

struct Fixture {
    use_case: ResendConfirmationEmailUseCase,
    repo: Arc<AccountRepositoryStub>,
    notifier: Arc<VerificationNotifierStub>,
    clock: Arc<FixedClock>,
    account_id: AccountId,
}

fn setup() -> Fixture {
    let repo = Arc::new(AccountRepositoryStub::new());
    let notifier = Arc::new(VerificationNotifierStub::new());
    let clock = Arc::new(FixedClock::default());

    let mut account = Account::builder(
        AccountId::new(),
        Nickname::try_new("hyuck9").unwrap(),
        Email::try_new("hyuck9@email.com").unwrap(),
        PasswordHash::from_raw("hash"),
    )
    .build();
    account.generate_email_check_token(clock.now());
    let account_id = *account.id();
    repo.add_account(account);

    let use_case = ResendConfirmationEmailUseCase::new(
        repo.clone(),
        Arc::new(StubTxManager),
        notifier.clone(),
        clock.clone(),
    );
    Fixture {
        use_case,
        repo,
        notifier,
        clock,
        account_id,
    }
}

#[tokio::test]
async fn test_resend_within_the_hour_is_forbidden() {
    let f = setup();
    f.clock.advance(Duration::minutes(30));

    let result = f
        .use_case
        .execute(ResendConfirmationEmailCommand { account_id: f.account_id })
        .await;

    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
    assert_eq!(f.notifier.sent_count(), 0);
}

#[tokio::test]
async fn test_resend_after_an_hour_issues_a_new_token() {
    let f = setup();
    let old_token = f.repo.get(&f.account_id).unwrap().email_check_token().cloned();
    f.clock.advance(Duration::minutes(61));

    f.use_case
        .execute(ResendConfirmationEmailCommand { account_id: f.account_id })
        .await
        .unwrap();

    let saved = f.repo.get(&f.account_id).unwrap();
    assert_ne!(saved.email_check_token().cloned(), old_token);
    assert_eq!(f.notifier.sent_count(), 1);
}

#[tokio::test]
async fn test_unknown_account_is_not_found() {
    let f = setup();

    let result = f
        .use_case
        .execute(ResendConfirmationEmailCommand { account_id: AccountId::new() })
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { entity: "Account", .. })));
}
