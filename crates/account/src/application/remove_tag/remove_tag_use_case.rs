// crates/account/src/application/remove_tag/remove_tag_use_case.rs

use std::sync::Arc;

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{Result, Submission};
use shared_kernel::infrastructure::{RetryConfig, with_retry};

use crate::application::add_tag::TagForm;
use crate::domain::repositories::{AccountRepository, TagRepository};
use crate::domain::validation::validate_tag_title;
use crate::domain::value_objects::{TagId, TagTitle};

/// Unlinks a tag from an account. Unknown titles are a no-op and the tag
/// row itself is never deleted.
pub struct RemoveTagUseCase {
    account_repo: Arc<dyn AccountRepository>,
    tag_repo: Arc<dyn TagRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl RemoveTagUseCase {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        tag_repo: Arc<dyn TagRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            account_repo,
            tag_repo,
            tx_manager,
        }
    }

    pub async fn execute(&self, account_id: AccountId, form: TagForm) -> Result<Submission<()>> {
        let errors = validate_tag_title(&form.tag_title);

        Submission::guard(errors, || async {
            let title = TagTitle::try_new(form.tag_title.as_str())?;
            let Some(tag) = self.tag_repo.find_by_title(&title).await? else {
                tracing::debug!(account_id = %account_id, title = %title, "Unknown tag, nothing to remove");
                return Ok(());
            };

            with_retry(RetryConfig::default(), || async {
                self.try_execute_once(&account_id, tag.id()).await
            })
            .await
        })
        .await
    }

    async fn try_execute_once(&self, account_id: &AccountId, tag_id: &TagId) -> Result<()> {
        let mut account = self
            .account_repo
            .find_by_id(account_id, None)
            .await?
            .ok_or_not_found(account_id)?;

        if !account.remove_tag(tag_id) {
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
