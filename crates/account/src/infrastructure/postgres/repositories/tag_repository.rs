// crates/account/src/infrastructure/postgres/repositories/tag_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::{Pool, Postgres, query, query_as};
use uuid::Uuid;

use crate::domain::entities::Tag;
use crate::domain::repositories::TagRepository;
use crate::domain::value_objects::{TagId, TagTitle};
use crate::infrastructure::postgres::rows::PostgresTagRow;

pub struct PostgresTagRepository {
    pool: Pool<Postgres>,
}

impl PostgresTagRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_by_title(&self, title: &TagTitle) -> Result<Option<Tag>> {
        let title = title.as_str().to_string();

        let row = <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query_as::<_, PostgresTagRow>("SELECT id, title FROM tags WHERE title = $1")
                    .bind(title)
                    .fetch_optional(conn)
                    .await
                    .map_domain::<Tag>()
            })
        })
        .await?;

        Ok(row.map(Tag::from))
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> Result<Vec<Tag>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = ids.iter().map(|id| id.as_uuid()).collect();

        let rows = <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query_as::<_, PostgresTagRow>(
                    "SELECT id, title FROM tags WHERE id = ANY($1) ORDER BY title",
                )
                .bind(ids)
                .fetch_all(conn)
                .await
                .map_domain::<Tag>()
            })
        })
        .await?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn find_all(&self) -> Result<Vec<Tag>> {
        let rows = <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query_as::<_, PostgresTagRow>("SELECT id, title FROM tags ORDER BY title")
                    .fetch_all(conn)
                    .await
                    .map_domain::<Tag>()
            })
        })
        .await?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn insert(&self, tag: &Tag) -> Result<()> {
        let id = tag.id().as_uuid();
        let title = tag.title().as_str().to_string();

        <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query("INSERT INTO tags (id, title) VALUES ($1, $2)")
                    .bind(id)
                    .bind(title)
                    .execute(conn)
                    .await
                    .map_domain::<Tag>()
            })
        })
        .await?;
        Ok(())
    }
}
