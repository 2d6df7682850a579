// crates/account/src/infrastructure/postgres/repositories/account_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::aggregates::AggregateRoot;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::{PgConnection, Pool, Postgres, query, query_as, query_scalar};

use crate::domain::entities::Account;
use crate::domain::repositories::AccountRepository;
use crate::domain::value_objects::{Email, Nickname};
use crate::infrastructure::postgres::rows::PostgresAccountRow;

const SELECT_ACCOUNT: &str = r#"
    SELECT a.id, a.nickname, a.email, a.password_hash,
           a.bio, a.url, a.occupation, a.location,
           a.email_verified, a.email_check_token, a.email_check_token_generated_at,
           a.joined_at, a.version, a.created_at, a.updated_at,
           ARRAY(SELECT t.tag_id FROM account_tags t WHERE t.account_id = a.id) AS tag_ids,
           ARRAY(SELECT z.zone_id FROM account_zones z WHERE z.account_id = a.id) AS zone_ids
    FROM accounts a
"#;

pub struct PostgresAccountRepository {
    pool: Pool<Postgres>,
}

impl PostgresAccountRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn find_one_by(&self, column: &'static str, value: String) -> Result<Option<Account>> {
        let sql = format!("{SELECT_ACCOUNT} WHERE a.{column} = $1");

        let row = <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query_as::<_, PostgresAccountRow>(&sql)
                    .bind(value)
                    .fetch_optional(conn)
                    .await
                    .map_domain::<Account>()
            })
        })
        .await?;

        Ok(row.map(Account::from))
    }

    async fn exists_by(&self, column: &'static str, value: String) -> Result<bool> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM accounts WHERE {column} = $1)");

        <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query_scalar::<Postgres, bool>(&sql)
                    .bind(value)
                    .fetch_one(conn)
                    .await
                    .map_domain::<Account>()
            })
        })
        .await
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn find_by_id(
        &self,
        id: &AccountId,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<Account>> {
        let uid = id.as_uuid();
        // Inside a transaction the row is locked until commit
        let sql = if tx.is_some() {
            format!("{SELECT_ACCOUNT} WHERE a.id = $1 FOR UPDATE OF a")
        } else {
            format!("{SELECT_ACCOUNT} WHERE a.id = $1")
        };

        let row = <dyn Transaction>::execute_on(&self.pool, tx, |conn| {
            Box::pin(async move {
                query_as::<_, PostgresAccountRow>(&sql)
                    .bind(uid)
                    .fetch_optional(conn)
                    .await
                    .map_domain::<Account>()
            })
        })
        .await?;

        Ok(row.map(Account::from))
    }

    async fn find_by_nickname(&self, nickname: &Nickname) -> Result<Option<Account>> {
        self.find_one_by("nickname", nickname.as_str().to_string()).await
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>> {
        self.find_one_by("email", email.as_str().to_string()).await
    }

    async fn exists_by_nickname(&self, nickname: &Nickname) -> Result<bool> {
        self.exists_by("nickname", nickname.as_str().to_string()).await
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool> {
        self.exists_by("email", email.as_str().to_string()).await
    }

    async fn save(&self, account: &Account, tx: Option<&mut dyn Transaction>) -> Result<()> {
        let row = PostgresAccountRow::from(account);
        let is_new = account.metadata().is_new();
        let expected_version = account.metadata().persisted_version();

        <dyn Transaction>::execute_on(&self.pool, tx, |conn| {
            Box::pin(async move {
                if is_new {
                    insert_account(conn, &row).await?;
                } else {
                    update_account(conn, &row, expected_version).await?;
                }
                sync_links(conn, &row).await
            })
        })
        .await
    }

    async fn delete_all(&self) -> Result<()> {
        <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query("TRUNCATE accounts CASCADE")
                    .execute(conn)
                    .await
                    .map_domain::<Account>()
            })
        })
        .await?;
        Ok(())
    }
}

async fn insert_account(conn: &mut PgConnection, row: &PostgresAccountRow) -> Result<()> {
    query(
        r#"
        INSERT INTO accounts (
            id, nickname, email, password_hash, bio, url, occupation, location,
            email_verified, email_check_token, email_check_token_generated_at,
            joined_at, version, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        "#,
    )
    .bind(row.id)
    .bind(&row.nickname)
    .bind(&row.email)
    .bind(&row.password_hash)
    .bind(&row.bio)
    .bind(&row.url)
    .bind(&row.occupation)
    .bind(&row.location)
    .bind(row.email_verified)
    .bind(&row.email_check_token)
    .bind(row.email_check_token_generated_at)
    .bind(row.joined_at)
    .bind(row.version)
    .bind(row.created_at)
    .bind(row.updated_at)
    .execute(&mut *conn)
    .await
    .map_domain::<Account>()?;
    Ok(())
}

/// Optimistic update: no row touched means someone else saved first
async fn update_account(
    conn: &mut PgConnection,
    row: &PostgresAccountRow,
    expected_version: i32,
) -> Result<()> {
    let result = query(
        r#"
        UPDATE accounts SET
            nickname = $2, email = $3, password_hash = $4,
            bio = $5, url = $6, occupation = $7, location = $8,
            email_verified = $9, email_check_token = $10,
            email_check_token_generated_at = $11, joined_at = $12,
            version = $13, updated_at = $14
        WHERE id = $1 AND version = $15
        "#,
    )
    .bind(row.id)
    .bind(&row.nickname)
    .bind(&row.email)
    .bind(&row.password_hash)
    .bind(&row.bio)
    .bind(&row.url)
    .bind(&row.occupation)
    .bind(&row.location)
    .bind(row.email_verified)
    .bind(&row.email_check_token)
    .bind(row.email_check_token_generated_at)
    .bind(row.joined_at)
    .bind(row.version)
    .bind(row.updated_at)
    .bind(expected_version)
    .execute(&mut *conn)
    .await
    .map_domain::<Account>()?;

    if result.rows_affected() == 0 {
        return Err(DomainError::ConcurrencyConflict {
            reason: format!("Account {} was modified concurrently", row.id),
        });
    }
    Ok(())
}

/// Replaces the tag and zone link rows with the aggregate's current sets
async fn sync_links(conn: &mut PgConnection, row: &PostgresAccountRow) -> Result<()> {
    query("DELETE FROM account_tags WHERE account_id = $1")
        .bind(row.id)
        .execute(&mut *conn)
        .await
        .map_domain::<Account>()?;

    if !row.tag_ids.is_empty() {
        query("INSERT INTO account_tags (account_id, tag_id) SELECT $1, UNNEST($2::uuid[])")
            .bind(row.id)
            .bind(&row.tag_ids)
            .execute(&mut *conn)
            .await
            .map_domain::<Account>()?;
    }

    query("DELETE FROM account_zones WHERE account_id = $1")
        .bind(row.id)
        .execute(&mut *conn)
        .await
        .map_domain::<Account>()?;

    if !row.zone_ids.is_empty() {
        query("INSERT INTO account_zones (account_id, zone_id) SELECT $1, UNNEST($2::uuid[])")
            .bind(row.id)
            .bind(&row.zone_ids)
            .execute(&mut *conn)
            .await
            .map_domain::<Account>()?;
    }

    Ok(())
}
