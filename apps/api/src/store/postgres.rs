use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use crate::models::resume::{ResumeRecord, ResumeRow, StoredResume};
use crate::store::{DocumentStore, StoreError};

/// Resumes stored as one JSONB document per row (`migrations/0001_create_resumes.sql`).
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        PgDocumentStore { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn list(&self, owner_id: &str) -> Result<Vec<StoredResume>, StoreError> {
        let rows = sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(decode_rows(rows))
    }

    async fn get(&self, id: Uuid, owner_id: &str) -> Result<Option<StoredResume>, StoreError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StoredResume::try_from).transpose()?)
    }

    async fn create(&self, record: &ResumeRecord, owner_id: &str) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let data = serde_json::to_value(record)?;

        sqlx::query(
            r#"
            INSERT INTO resumes (id, user_id, data, created_at, updated_at)
            VALUES ($1, $2, $3, now(), now())
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(&data)
        .execute(&self.pool)
        .await?;

        info!("Inserted resume {id} for user {owner_id}");
        Ok(id)
    }

    async fn update(
        &self,
        id: Uuid,
        owner_id: &str,
        record: &ResumeRecord,
    ) -> Result<(), StoreError> {
        let data = serde_json::to_value(record)?;

        let result = sqlx::query(
            "UPDATE resumes SET data = $1, updated_at = now() WHERE id = $2 AND user_id = $3",
        )
        .bind(&data)
        .bind(id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid, owner_id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        info!("Deleted resume {id} for user {owner_id}");
        Ok(())
    }
}

/// Decodes listed rows. One undecodable document must not hide the owner's other
/// resumes, so it is logged and skipped.
fn decode_rows(rows: Vec<ResumeRow>) -> Vec<StoredResume> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            StoredResume::try_from(row)
                .map_err(|e| error!("Skipping undecodable resume {id}: {e}"))
                .ok()
        })
        .collect()
}
