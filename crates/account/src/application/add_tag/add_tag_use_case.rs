// crates/account/src/application/add_tag/add_tag_use_case.rs

use std::sync::Arc;

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{Result, Submission};
use shared_kernel::infrastructure::{RetryConfig, with_retry};

use crate::application::add_tag::TagForm;
use crate::application::resolvers::TagResolver;
use crate::domain::repositories::AccountRepository;
use crate::domain::validation::validate_tag_title;
use crate::domain::value_objects::{TagId, TagTitle};

pub struct AddTagUseCase {
    account_repo: Arc<dyn AccountRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    tag_resolver: Arc<TagResolver>,
}

impl AddTagUseCase {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        tx_manager: Arc<dyn TransactionManager>,
        tag_resolver: Arc<TagResolver>,
    ) -> Self {
        Self {
            account_repo,
            tx_manager,
            tag_resolver,
        }
    }

    pub async fn execute(&self, account_id: AccountId, form: TagForm) -> Result<Submission<()>> {
        let errors = validate_tag_title(&form.tag_title);

        Submission::guard(errors, || async {
            let title = TagTitle::try_new(form.tag_title.as_str())?;
            // Tag rows are shared, so they are created outside the account transaction
            let tag = self.tag_resolver.resolve(&title).await?;

            with_retry(RetryConfig::default(), || async {
                self.try_execute_once(&account_id, *tag.id()).await
            })
            .await
        })
        .await
    }

    async fn try_execute_once(&self, account_id: &AccountId, tag_id: TagId) -> Result<()> {
        let mut account = self
            .account_repo
            .find_by_id(account_id, None)
            .await?
            .ok_or_not_found(account_id)?;

        if !account.add_tag(tag_id) {
            return Ok(());
        }

        self.tx_manager
            .run_in_transaction(move |tx| {
                let repo = self.account_repo.clone();
                Box::pin(async move { repo.save(&account, Some(tx)).await })
            })
            .await
    }
}
