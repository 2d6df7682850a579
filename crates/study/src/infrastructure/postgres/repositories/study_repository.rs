// crates/study/src/infrastructure/postgres/repositories/study_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::aggregates::AggregateRoot;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::{PgConnection, Pool, Postgres, query, query_as, query_scalar};

use crate::domain::entities::Study;
use crate::domain::repositories::StudyRepository;
use crate::domain::value_objects::{StudyId, StudyPath};
use crate::infrastructure::postgres::rows::PostgresStudyRow;

const SELECT_STUDY: &str = r#"
    SELECT s.id, s.path, s.title, s.short_description, s.full_description,
           s.version, s.created_at, s.updated_at,
           ARRAY(SELECT m.account_id FROM study_managers m WHERE m.study_id = s.id) AS manager_ids,
           ARRAY(SELECT m.account_id FROM study_members m WHERE m.study_id = s.id) AS member_ids
    FROM studies s
"#;

pub struct PostgresStudyRepository {
    pool: Pool<Postgres>,
}

impl PostgresStudyRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudyRepository for PostgresStudyRepository {
    async fn find_by_id(&self, id: &StudyId, tx: Option<&mut dyn Transaction>) -> Result<Option<Study>> {
        let uid = id.as_uuid();
        let sql = if tx.is_some() {
            format!("{SELECT_STUDY} WHERE s.id = $1 FOR UPDATE OF s")
        } else {
            format!("{SELECT_STUDY} WHERE s.id = $1")
        };

        let row = <dyn Transaction>::execute_on(&self.pool, tx, |conn| {
            Box::pin(async move {
                query_as::<_, PostgresStudyRow>(&sql)
                    .bind(uid)
                    .fetch_optional(conn)
                    .await
                    .map_domain::<Study>()
            })
        })
        .await?;

        Ok(row.map(Study::from))
    }

    async fn find_by_path(&self, path: &StudyPath) -> Result<Option<Study>> {
        let sql = format!("{SELECT_STUDY} WHERE s.path = $1");
        let path = path.as_str().to_string();

        let row = <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query_as::<_, PostgresStudyRow>(&sql)
                    .bind(path)
                    .fetch_optional(conn)
                    .await
                    .map_domain::<Study>()
            })
        })
        .await?;

        Ok(row.map(Study::from))
    }

    async fn exists_by_path(&self, path: &StudyPath) -> Result<bool> {
        let path = path.as_str().to_string();

        <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query_scalar::<Postgres, bool>("SELECT EXISTS(SELECT 1 FROM studies WHERE path = $1)")
                    .bind(path)
                    .fetch_one(conn)
                    .await
                    .map_domain::<Study>()
            })
        })
        .await
    }

    async fn save(&self, study: &Study, tx: Option<&mut dyn Transaction>) -> Result<()> {
        let row = PostgresStudyRow::from(study);
        let is_new = study.metadata().is_new();
        let expected_version = study.metadata().persisted_version();

        <dyn Transaction>::execute_on(&self.pool, tx, |conn| {
            Box::pin(async move {
                if is_new {
                    insert_study(conn, &row).await?;
                } else {
                    update_study(conn, &row, expected_version).await?;
                }
                sync_account_links(conn, "study_managers", row.id, &row.manager_ids).await?;
                sync_account_links(conn, "study_members", row.id, &row.member_ids).await
            })
        })
        .await
    }
}

async fn insert_study(conn: &mut PgConnection, row: &PostgresStudyRow) -> Result<()> {
    query(
        r#"
        INSERT INTO studies (
            id, path, title, short_description, full_description,
            version, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(row.id)
    .bind(&row.path)
    .bind(&row.title)
    .bind(&row.short_description)
    .bind(&row.full_description)
    .bind(row.version)
    .bind(row.created_at)
    .bind(row.updated_at)
    .execute(&mut *conn)
    .await
    .map_domain::<Study>()?;
    Ok(())
}

async fn update_study(
    conn: &mut PgConnection,
    row: &PostgresStudyRow,
    expected_version: i32,
) -> Result<()> {
    let result = query(
        r#"
        UPDATE studies SET
            title = $2, short_description = $3, full_description = $4,
            version = $5, updated_at = $6
        WHERE id = $1 AND version = $7
        "#,
    )
    .bind(row.id)
    .bind(&row.title)
    .bind(&row.short_description)
    .bind(&row.full_description)
    .bind(row.version)
    .bind(row.updated_at)
    .bind(expected_version)
    .execute(&mut *conn)
    .await
    .map_domain::<Study>()?;

    if result.rows_affected() == 0 {
        return Err(DomainError::ConcurrencyConflict {
            reason: format!("Study {} was modified concurrently", row.id),
        });
    }
    Ok(())
}

/// `table` is one of the two fixed link tables, never user input
async fn sync_account_links(
    conn: &mut PgConnection,
    table: &'static str,
    study_id: uuid::Uuid,
    account_ids: &[uuid::Uuid],
) -> Result<()> {
    query(&format!("DELETE FROM {table} WHERE study_id = $1"))
        .bind(study_id)
        .execute(&mut *conn)
        .await
        .map_domain::<Study>()?;

    if !account_ids.is_empty() {
        query(&format!(
            "INSERT INTO {table} (study_id, account_id) SELECT $1, UNNEST($2::uuid[])"
        ))
        .bind(study_id)
        .bind(account_ids)
        .execute(&mut *conn)
        .await
        .map_domain::<Study>()?;
    }

    Ok(())
}
