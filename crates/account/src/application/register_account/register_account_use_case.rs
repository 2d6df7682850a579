// crates/account/src/application/register_account/register_account_use_case.rs

use std::sync::Arc;

use shared_kernel::clock::Clock;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{Result, Submission};

use crate::application::register_account::SignUpForm;
use crate::domain::entities::Account;
use crate::domain::ports::{PasswordEncoder, VerificationNotifier};
use crate::domain::repositories::AccountRepository;
use crate::domain::validation::validate_sign_up;
use crate::domain::value_objects::{Email, Nickname, RawPassword};

pub struct RegisterAccountUseCase {
    account_repo: Arc<dyn AccountRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    password_encoder: Arc<dyn PasswordEncoder>,
    notifier: Arc<dyn VerificationNotifier>,
    clock: Arc<dyn Clock>,
}

impl RegisterAccountUseCase {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        tx_manager: Arc<dyn TransactionManager>,
        password_encoder: Arc<dyn PasswordEncoder>,
        notifier: Arc<dyn VerificationNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            account_repo,
            tx_manager,
            password_encoder,
            notifier,
            clock,
        }
    }

    pub async fn execute(&self, form: SignUpForm) -> Result<Submission<AccountId>> {
        let errors = validate_sign_up(
            self.account_repo.as_ref(),
            &form.nickname,
            &form.email,
            &form.password,
        )
        .await?;

        Submission::guard(errors, || self.register(&form)).await
    }

    async fn register(&self, form: &SignUpForm) -> Result<AccountId> {
        let nickname = Nickname::try_new(form.nickname.as_str())?;
        let email = Email::try_new(form.email.as_str())?;
        let password_hash = self
            .password_encoder
            .encode(&RawPassword::try_new(form.password.as_str())?)?;

        let now = self.clock.now();
        let mut account = Account::builder(AccountId::new(), nickname, email, password_hash)
            .with_created_at(now)
            .build();
        account.generate_email_check_token(now);

        let account_id = *account.id();
        let to_save = account.clone();

        // A unique constraint hit here means a concurrent sign up won the
        // nickname or email after validation: surfaced as AlreadyExists.
        self.tx_manager
            .run_in_transaction(move |tx| {
                let repo = self.account_repo.clone();
                Box::pin(async move { repo.save(&to_save, Some(tx)).await })
            })
            .await?;

        tracing::info!(account_id = %account_id, nickname = %account.nickname(), "Account registered");

        // Only once the row is committed
        if let Some(token) = account.email_check_token() {
            self.notifier
                .send_confirmation(account.email(), account.nickname(), token)
                .await;
        }

        Ok(account_id)
    }
}
