// crates/account/src/infrastructure/postgres/rows/postgres_account_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::Identifier;
use shared_kernel::domain::aggregates::AggregateRoot;
use shared_kernel::domain::value_objects::AccountId;
use uuid::Uuid;

use crate::domain::builders::AccountBuilder;
use crate::domain::entities::Account;
use crate::domain::value_objects::{
    Bio, Email, EmailToken, Nickname, PasswordHash, Profile, ProfileText, TagId, ZoneId,
};

/// One `accounts` row plus the ids of its linked tags and zones, gathered
/// with `ARRAY(...)` sub-selects.
#[derive(Debug, sqlx::FromRow)]
pub struct PostgresAccountRow {
    pub id: Uuid,
    pub nickname: String,
    pub email: String,
    pub password_hash: String,
    pub bio: Option<String>,
    pub url: Option<String>,
    pub occupation: Option<String>,
    pub location: Option<String>,
    pub email_verified: bool,
    pub email_check_token: Option<String>,
    pub email_check_token_generated_at: Option<DateTime<Utc>>,
    pub joined_at: Option<DateTime<Utc>>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tag_ids: Vec<Uuid>,
    pub zone_ids: Vec<Uuid>,
}

impl From<PostgresAccountRow> for Account {
    fn from(row: PostgresAccountRow) -> Self {
        let profile = Profile {
            bio: row.bio.map(Bio::from_raw),
            url: row.url.map(ProfileText::from_raw),
            occupation: row.occupation.map(ProfileText::from_raw),
            location: row.location.map(ProfileText::from_raw),
        };

        AccountBuilder::restore(
            AccountId::from_uuid(row.id),
            Nickname::from_raw(row.nickname),
            Email::from_raw(row.email),
            PasswordHash::from_raw(row.password_hash),
            profile,
            row.email_verified,
            row.email_check_token.map(EmailToken::from_raw),
            row.email_check_token_generated_at,
            row.joined_at,
            row.tag_ids.into_iter().map(TagId::from_uuid).collect(),
            row.zone_ids.into_iter().map(ZoneId::from_uuid).collect(),
            row.version,
            row.created_at,
            row.updated_at,
        )
    }
}

impl From<&Account> for PostgresAccountRow {
    fn from(a: &Account) -> Self {
        let profile = a.profile();
        Self {
            id: a.id().as_uuid(),
            nickname: a.nickname().as_str().to_string(),
            email: a.email().as_str().to_string(),
            password_hash: a.password_hash().as_str().to_string(),
            bio: profile.bio.as_ref().map(|b| b.as_str().to_string()),
            url: profile.url.as_ref().map(|t| t.as_str().to_string()),
            occupation: profile.occupation.as_ref().map(|t| t.as_str().to_string()),
            location: profile.location.as_ref().map(|t| t.as_str().to_string()),
            email_verified: a.is_email_verified(),
            email_check_token: a.email_check_token().map(|t| t.as_str().to_string()),
            email_check_token_generated_at: a.email_check_token_generated_at(),
            joined_at: a.joined_at(),
            version: a.version(),
            created_at: a.created_at(),
            updated_at: a.updated_at(),
            tag_ids: a.tags().iter().map(|id| id.as_uuid()).collect(),
            zone_ids: a.zones().iter().map(|id| id.as_uuid()).collect(),
        }
    }
}
