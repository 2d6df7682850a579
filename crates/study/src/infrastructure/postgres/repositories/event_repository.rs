// crates/study/src/infrastructure/postgres/repositories/event_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::aggregates::AggregateRoot;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::{PgConnection, Pool, Postgres, query, query_as};

use crate::domain::entities::Event;
use crate::domain::repositories::EventRepository;
use crate::domain::value_objects::{EventId, StudyId};
use crate::infrastructure::postgres::rows::PostgresEventRow;

const SELECT_EVENT: &str = r#"
    SELECT id, study_id, created_by, title, description, event_type,
           limit_of_enrollments, end_enrollment_at, start_at, end_at,
           version, created_at, updated_at
    FROM events
"#;

pub struct PostgresEventRepository {
    pool: Pool<Postgres>,
}

impl PostgresEventRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn find_by_id(&self, id: &EventId, tx: Option<&mut dyn Transaction>) -> Result<Option<Event>> {
        let uid = id.as_uuid();
        let sql = if tx.is_some() {
            format!("{SELECT_EVENT} WHERE id = $1 FOR UPDATE")
        } else {
            format!("{SELECT_EVENT} WHERE id = $1")
        };

        let row = <dyn Transaction>::execute_on(&self.pool, tx, |conn| {
            Box::pin(async move {
                query_as::<_, PostgresEventRow>(&sql)
                    .bind(uid)
                    .fetch_optional(conn)
                    .await
                    .map_domain::<Event>()
            })
        })
        .await?;

        row.map(Event::try_from).transpose()
    }

    async fn find_by_study(&self, study_id: &StudyId) -> Result<Vec<Event>> {
        let sql = format!("{SELECT_EVENT} WHERE study_id = $1 ORDER BY start_at, created_at");
        let uid = study_id.as_uuid();

        let rows = <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query_as::<_, PostgresEventRow>(&sql)
                    .bind(uid)
                    .fetch_all(conn)
                    .await
                    .map_domain::<Event>()
            })
        })
        .await?;

        rows.into_iter().map(Event::try_from).collect()
    }

    async fn save(&self, event: &Event, tx: Option<&mut dyn Transaction>) -> Result<()> {
        let row = PostgresEventRow::from(event);
        let is_new = event.metadata().is_new();
        let expected_version = event.metadata().persisted_version();

        <dyn Transaction>::execute_on(&self.pool, tx, |conn| {
            Box::pin(async move {
                if is_new {
                    insert_event(conn, &row).await
                } else {
                    update_event(conn, &row, expected_version).await
                }
            })
        })
        .await
    }
}

async fn insert_event(conn: &mut PgConnection, row: &PostgresEventRow) -> Result<()> {
    query(
        r#"
        INSERT INTO events (
            id, study_id, created_by, title, description, event_type,
            limit_of_enrollments, end_enrollment_at, start_at, end_at,
            version, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        "#,
    )
    .bind(row.id)
    .bind(row.study_id)
    .bind(row.created_by)
    .bind(&row.title)
    .bind(&row.description)
    .bind(&row.event_type)
    .bind(row.limit_of_enrollments)
    .bind(row.end_enrollment_at)
    .bind(row.start_at)
    .bind(row.end_at)
    .bind(row.version)
    .bind(row.created_at)
    .bind(row.updated_at)
    .execute(&mut *conn)
    .await
    .map_domain::<Event>()?;
    Ok(())
}

/// Type, author and study are never rewritten
async fn update_event(
    conn: &mut PgConnection,
    row: &PostgresEventRow,
    expected_version: i32,
) -> Result<()> {
    let result = query(
        r#"
        UPDATE events SET
            title = $2, description = $3, limit_of_enrollments = $4,
            end_enrollment_at = $5, start_at = $6, end_at = $7,
            version = $8, updated_at = $9
        WHERE id = $1 AND version = $10
        "#,
    )
    .bind(row.id)
    .bind(&row.title)
    .bind(&row.description)
    .bind(row.limit_of_enrollments)
    .bind(row.end_enrollment_at)
    .bind(row.start_at)
    .bind(row.end_at)
    .bind(row.version)
    .bind(row.updated_at)
    .bind(expected_version)
    .execute(&mut *conn)
    .await
    .map_domain::<Event>()?;

    if result.rows_affected() == 0 {
        return Err(DomainError::ConcurrencyConflict {
            reason: format!("Event {} was modified concurrently", row.id),
        });
    }
    Ok(())
}
