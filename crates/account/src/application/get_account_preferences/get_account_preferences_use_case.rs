// crates/account/src/application/get_account_preferences/get_account_preferences_use_case.rs

use std::sync::Arc;

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;

use crate::application::get_account_preferences::AccountPreferences;
use crate::domain::repositories::{AccountRepository, TagRepository, ZoneRepository};
use crate::domain::value_objects::{TagId, ZoneId};

pub struct GetAccountPreferencesUseCase {
    account_repo: Arc<dyn AccountRepository>,
    tag_repo: Arc<dyn TagRepository>,
    zone_repo: Arc<dyn ZoneRepository>,
}

impl GetAccountPreferencesUseCase {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        tag_repo: Arc<dyn TagRepository>,
        zone_repo: Arc<dyn ZoneRepository>,
    ) -> Self {
        Self {
            account_repo,
            tag_repo,
            zone_repo,
        }
    }

    pub async fn execute(&self, account_id: AccountId) -> Result<AccountPreferences> {
        let account = self
            .account_repo
            .find_by_id(&account_id, None)
            .await?
            .ok_or_not_found(account_id)?;

        let tag_ids: Vec<TagId> = account.tags().iter().copied().collect();
        let zone_ids: Vec<ZoneId> = account.zones().iter().copied().collect();

        let (tags, zones, all_tags, all_zones) = futures::try_join!(
            self.tag_repo.find_by_ids(&tag_ids),
            self.zone_repo.find_by_ids(&zone_ids),
            self.tag_repo.find_all(),
            self.zone_repo.find_all(),
        )?;

        Ok(AccountPreferences {
            tags: tags.iter().map(|t| t.title().to_string()).collect(),
            zones: zones.iter().map(ToString::to_string).collect(),
            tag_whitelist: all_tags.iter().map(|t| t.title().to_string()).collect(),
            zone_whitelist: all_zones.iter().map(ToString::to_string).collect(),
        })
    }
}
