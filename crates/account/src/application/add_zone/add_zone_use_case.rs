// crates/account/src/application/add_zone/add_zone_use_case.rs

use std::sync::Arc;

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{Result, Submission};
use shared_kernel::infrastructure::{RetryConfig, with_retry};

use crate::application::add_zone::ZoneForm;
use crate::application::resolvers::ZoneResolver;
use crate::domain::repositories::AccountRepository;
use crate::domain::validation::validate_zone_name;
use crate::domain::value_objects::{ZoneId, ZoneLabel};

pub struct AddZoneUseCase {
    account_repo: Arc<dyn AccountRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    zone_resolver: Arc<ZoneResolver>,
}

impl AddZoneUseCase {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        tx_manager: Arc<dyn TransactionManager>,
        zone_resolver: Arc<ZoneResolver>,
    ) -> Self {
        Self {
            account_repo,
            tx_manager,
            zone_resolver,
        }
    }

    pub async fn execute(&self, account_id: AccountId, form: ZoneForm) -> Result<Submission<()>> {
        let errors = validate_zone_name(&form.zone_name);

        Submission::guard(errors, || async {
            let label: ZoneLabel = form.zone_name.parse()?;
            let zone = self.zone_resolver.resolve(&label).await?;

            with_retry(RetryConfig::default(), || async {
                self.try_execute_once(&account_id, *zone.id()).await
            })
            .await
        })
        .await
    }

    async fn try_execute_once(&self, account_id: &AccountId, zone_id: ZoneId) -> Result<()> {
        let mut account = self
            .account_repo
            .find_by_id(account_id, None)
            .await?
            .ok_or_not_found(account_id)?;

        if !account.add_zone(zone_id) {
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
