//! Postgres-backed record store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reelvault_core::Record;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use crate::store::{RecordStore, StoreResult};

#[derive(Debug, sqlx::FromRow)]
struct RecordRow {
    id: Uuid,
    owner_id: Uuid,
    title: String,
    description: String,
    thumbnail_url: Option<String>,
    video_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RecordRow> for Record {
    fn from(row: RecordRow) -> Self {
        Record {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            description: row.description,
            thumbnail_url: row.thumbnail_url,
            video_url: row.video_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Record store on a Postgres pool.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run pending schema migrations.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    #[tracing::instrument(skip(self), fields(db.table = "records", db.operation = "select"))]
    async fn get(&self, id: Uuid) -> StoreResult<Option<Record>> {
        let row: Option<RecordRow> = sqlx::query_as::<Postgres, RecordRow>(
            r#"
            SELECT id, owner_id, title, description,
                   thumbnail_url, video_url, created_at, updated_at
            FROM records
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Record::from))
    }

    #[tracing::instrument(
        skip(self, record),
        fields(db.table = "records", db.operation = "update", record_id = %record.id)
    )]
    async fn update(&self, record: &Record) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE records
            SET title = $2, description = $3,
                thumbnail_url = $4, video_url = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.thumbnail_url)
        .bind(&record.video_url)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(
        skip(self, record),
        fields(db.table = "records", db.operation = "insert", record_id = %record.id)
    )]
    async fn create(&self, record: &Record) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO records (
                id, owner_id, title, description,
                thumbnail_url, video_url, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(record.id)
        .bind(record.owner_id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.thumbnail_url)
        .bind(&record.video_url)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
