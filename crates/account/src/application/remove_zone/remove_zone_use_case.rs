// crates/account/src/application/remove_zone/remove_zone_use_case.rs

use std::sync::Arc;

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{Result, Submission};
use shared_kernel::infrastructure::{RetryConfig, with_retry};

use crate::application::add_zone::ZoneForm;
use crate::domain::repositories::{AccountRepository, ZoneRepository};
use crate::domain::validation::validate_zone_name;
use crate::domain::value_objects::{ZoneId, ZoneLabel};

pub struct RemoveZoneUseCase {
    account_repo: Arc<dyn AccountRepository>,
    zone_repo: Arc<dyn ZoneRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl RemoveZoneUseCase {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        zone_repo: Arc<dyn ZoneRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            account_repo,
            zone_repo,
            tx_manager,
        }
    }

    pub async fn execute(&self, account_id: AccountId, form: ZoneForm) -> Result<Submission<()>> {
        let errors = validate_zone_name(&form.zone_name);

        Submission::guard(errors, || async {
            let label: ZoneLabel = form.zone_name.parse()?;
            let Some(zone) = self
                .zone_repo
                .find_by_city_and_province(&label.city, &label.province)
                .await?
            else {
                tracing::debug!(account_id = %account_id, zone = %label, "Unknown zone, nothing to remove");
                return Ok(());
            };

            with_retry(RetryConfig::default(), || async {
                self.try_execute_once(&account_id, zone.id()).await
            })
            .await
        })
        .await
    }

    async fn try_execute_once(&self, account_id: &AccountId, zone_id: &ZoneId) -> Result<()> {
        let mut account = self
            .account_repo
            .find_by_id(account_id, None)
            .await?
            .ok_or_not_found(account_id)?;

        if !account.remove_zone(zone_id) {
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
