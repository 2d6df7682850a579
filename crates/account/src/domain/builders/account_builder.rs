// crates/account/src/domain/builders/account_builder.rs

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use shared_kernel::domain::aggregates::AggregateMetadata;
use shared_kernel::domain::value_objects::AccountId;

use crate::domain::entities::Account;
use crate::domain::value_objects::{
    Email, EmailToken, Nickname, PasswordHash, Profile, TagId, ZoneId,
};

pub struct AccountBuilder {
    id: AccountId,
    nickname: Nickname,
    email: Email,
    password_hash: PasswordHash,
    profile: Profile,
    created_at: Option<DateTime<Utc>>,
    version: i32,
}

impl AccountBuilder {
    /// Path 1: creation at sign up
    pub fn new(id: AccountId, nickname: Nickname, email: Email, password_hash: PasswordHash) -> Self {
        Self {
            id,
            nickname,
            email,
            password_hash,
            profile: Profile::default(),
            created_at: None,
            version: 1,
        }
    }

    /// Path 2: rebuild from storage, no defaults and no validation
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: AccountId,
        nickname: Nickname,
        email: Email,
        password_hash: PasswordHash,
        profile: Profile,
        email_verified: bool,
        email_check_token: Option<EmailToken>,
        email_check_token_generated_at: Option<DateTime<Utc>>,
        joined_at: Option<DateTime<Utc>>,
        tags: BTreeSet<TagId>,
        zones: BTreeSet<ZoneId>,
        version: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Account {
        Account {
            id,
            nickname,
            email,
            password_hash,
            profile,
            email_verified,
            email_check_token,
            email_check_token_generated_at,
            joined_at,
            tags,
            zones,
            created_at,
            updated_at,
            metadata: AggregateMetadata::restore(version),
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// New accounts start unverified, without token and without preferences
    pub fn build(self) -> Account {
        let now = self.created_at.unwrap_or_else(Utc::now);

        Account {
            id: self.id,
            nickname: self.nickname,
            email: self.email,
            password_hash: self.password_hash,
            profile: self.profile,
            email_verified: false,
            email_check_token: None,
            email_check_token_generated_at: None,
            joined_at: None,
            tags: BTreeSet::new(),
            zones: BTreeSet::new(),
            created_at: now,
            updated_at: now,
            metadata: AggregateMetadata::new(self.version),
        }
    }
}
