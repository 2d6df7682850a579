// crates/study/tests/common/mod.rs

use account::domain::entities::Account;
use account::domain::repositories::AccountRepository;
use account::domain::value_objects::{Email, Nickname, PasswordHash};
use account::infrastructure::postgres::repositories::PostgresAccountRepository;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;

/// Fresh Postgres container with the account schema, then the study schema
pub async fn setup_postgres_test_db() -> PostgresTestContext {
    PostgresTestContext::builder()
        .with_migrations(&["../account/migrations/postgres", "migrations/postgres"])
        .build()
        .await
        .expect("Postgres test container should start")
}

/// Managers, members and event authors must reference real accounts
pub async fn persisted_account(ctx: &PostgresTestContext, nickname: &str) -> AccountId {
    let account = Account::builder(
        AccountId::new(),
        Nickname::try_new(nickname).unwrap(),
        Email::try_new(format!("{nickname}@email.com")).unwrap(),
        PasswordHash::from_raw("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"),
    )
    .build();
    PostgresAccountRepository::new(ctx.pool())
        .save(&account, None)
        .await
        .unwrap();
    *account.id()
}
