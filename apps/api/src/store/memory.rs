use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::resume::{ResumeRecord, StoredResume};
use crate::store::{DocumentStore, StoreError};

/// Process-local store. Used when no database is configured, and by tests.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    docs: RwLock<Vec<StoredResume>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list(&self, owner_id: &str) -> Result<Vec<StoredResume>, StoreError> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter(|d| d.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: Uuid, owner_id: &str) -> Result<Option<StoredResume>, StoreError> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .find(|d| d.id == id && d.user_id == owner_id)
            .cloned())
    }

    async fn create(&self, record: &ResumeRecord, owner_id: &str) -> Result<Uuid, StoreError> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        self.docs.write().await.push(StoredResume {
            id,
            user_id: owner_id.to_string(),
            record: record.clone(),
            created_at: now,
            updated_at: now,
        });
        debug!("Created resume {id} for user {owner_id}");
        Ok(id)
    }

    async fn update(
        &self,
        id: Uuid,
        owner_id: &str,
        record: &ResumeRecord,
    ) -> Result<(), StoreError> {
        let mut docs = self.docs.write().await;
        let doc = docs
            .iter_mut()
            .find(|d| d.id == id && d.user_id == owner_id)
            .ok_or(StoreError::NotFound(id))?;
        doc.record = record.clone();
        doc.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: Uuid, owner_id: &str) -> Result<(), StoreError> {
        let mut docs = self.docs.write().await;
        let before = docs.len();
        docs.retain(|d| !(d.id == id && d.user_id == owner_id));
        if docs.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
