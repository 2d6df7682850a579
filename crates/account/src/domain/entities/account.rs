// crates/account/src/domain/entities/account.rs

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use shared_kernel::domain::Identifier;
use shared_kernel::domain::aggregates::{AggregateMetadata, AggregateRoot};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::builders::AccountBuilder;
use crate::domain::value_objects::{
    Email, EmailToken, Nickname, PasswordHash, Profile, TagId, ZoneId,
};

/// Aggregate root for a member of the platform.
///
/// Owns identity (nickname, email), credential, profile, email verification
/// state and the member's tag and zone preferences. Every mutation bumps the
/// aggregate version; no-op mutations return `false` and leave it untouched.
#[derive(Debug, Clone)]
pub struct Account {
    pub(crate) id: AccountId,
    pub(crate) nickname: Nickname,
    pub(crate) email: Email,
    pub(crate) password_hash: PasswordHash,
    pub(crate) profile: Profile,
    pub(crate) email_verified: bool,
    pub(crate) email_check_token: Option<EmailToken>,
    pub(crate) email_check_token_generated_at: Option<DateTime<Utc>>,
    pub(crate) joined_at: Option<DateTime<Utc>>,
    pub(crate) tags: BTreeSet<TagId>,
    pub(crate) zones: BTreeSet<ZoneId>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) metadata: AggregateMetadata,
}

impl Account {
    /// Minimum delay between two confirmation emails
    pub const CONFIRMATION_EMAIL_COOLDOWN_MINUTES: i64 = 60;

    pub fn builder(
        id: AccountId,
        nickname: Nickname,
        email: Email,
        password_hash: PasswordHash,
    ) -> AccountBuilder {
        AccountBuilder::new(id, nickname, email, password_hash)
    }

    // ==========================================
    // IDENTITY & CREDENTIAL
    // ==========================================

    /// The caller has checked the nickname is free (or already ours).
    pub fn change_nickname(&mut self, new_nickname: Nickname) -> bool {
        if self.nickname == new_nickname {
            return false;
        }
        self.nickname = new_nickname;
        self.apply_change();
        true
    }

    /// Hashes are salted, so any call is a change
    pub fn change_password(&mut self, new_hash: PasswordHash) {
        self.password_hash = new_hash;
        self.apply_change();
    }

    /// Replaces every profile field; absent fields are cleared.
    pub fn update_profile(&mut self, profile: Profile) -> bool {
        if self.profile == profile {
            return false;
        }
        self.profile = profile;
        self.apply_change();
        true
    }

    // ==========================================
    // EMAIL VERIFICATION
    // ==========================================

    pub fn generate_email_check_token(&mut self, now: DateTime<Utc>) {
        self.email_check_token = Some(EmailToken::generate());
        self.email_check_token_generated_at = Some(now);
        self.apply_change_at(now);
    }

    pub fn is_valid_token(&self, token: &str) -> bool {
        self.email_check_token
            .as_ref()
            .is_some_and(|t| t.matches(token))
    }

    /// Marks the email as verified. Returns `false` when it already was.
    pub fn complete_sign_up(&mut self, token: &str, now: DateTime<Utc>) -> Result<bool> {
        if self.email_verified {
            return Ok(false);
        }

        if !self.is_valid_token(token) {
            return Err(DomainError::Validation {
                field: "token",
                reason: "Email check token does not match".into(),
            });
        }

        self.email_verified = true;
        self.joined_at = Some(now);
        self.apply_change_at(now);
        Ok(true)
    }

    pub fn can_send_confirmation_email(&self, now: DateTime<Utc>) -> bool {
        self.email_check_token_generated_at.is_none_or(|generated_at| {
            now - generated_at > Duration::minutes(Self::CONFIRMATION_EMAIL_COOLDOWN_MINUTES)
        })
    }

    // ==========================================
    // PREFERENCES
    // ==========================================

    pub fn add_tag(&mut self, tag_id: TagId) -> bool {
        let inserted = self.tags.insert(tag_id);
        if inserted {
            self.apply_change();
        }
        inserted
    }

    pub fn remove_tag(&mut self, tag_id: &TagId) -> bool {
        let removed = self.tags.remove(tag_id);
        if removed {
            self.apply_change();
        }
        removed
    }

    pub fn add_zone(&mut self, zone_id: ZoneId) -> bool {
        let inserted = self.zones.insert(zone_id);
        if inserted {
            self.apply_change();
        }
        inserted
    }

    pub fn remove_zone(&mut self, zone_id: &ZoneId) -> bool {
        let removed = self.zones.remove(zone_id);
        if removed {
            self.apply_change();
        }
        removed
    }

    // ==========================================
    // GETTERS
    // ==========================================

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn is_email_verified(&self) -> bool {
        self.email_verified
    }

    pub fn email_check_token(&self) -> Option<&EmailToken> {
        self.email_check_token.as_ref()
    }

    pub fn email_check_token_generated_at(&self) -> Option<DateTime<Utc>> {
        self.email_check_token_generated_at
    }

    pub fn joined_at(&self) -> Option<DateTime<Utc>> {
        self.joined_at
    }

    pub fn tags(&self) -> &BTreeSet<TagId> {
        &self.tags
    }

    pub fn zones(&self) -> &BTreeSet<ZoneId> {
        &self.zones
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn apply_change(&mut self) {
        self.apply_change_at(Utc::now());
    }

    fn apply_change_at(&mut self, now: DateTime<Utc>) {
        self.increment_version();
        self.updated_at = now;
    }
}

impl EntityMetadata for Account {
    fn entity_name() -> &'static str {
        "Account"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "accounts_nickname_key" => "nickname",
            "accounts_email_key" => "email",
            _ => "unique_constraint",
        }
    }
}

impl AggregateRoot for Account {
    fn id(&self) -> String {
        self.id.as_string()
    }

    fn metadata(&self) -> &AggregateMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut AggregateMetadata {
        &mut self.metadata
    }
}
