//! Document Store collaborator.
//!
//! Whole-document CRUD over resumes, scoped by owner. Implementations enforce
//! ownership: a document belonging to another owner behaves as if it did not exist.
//! Updates replace the full record; there are no field-level patches.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::resume::{ResumeRecord, StoredResume};

pub use memory::InMemoryDocumentStore;
pub use postgres::PgDocumentStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Resume {0} not found")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored resume could not be decoded: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All resumes of `owner_id`, oldest first.
    async fn list(&self, owner_id: &str) -> Result<Vec<StoredResume>, StoreError>;

    async fn get(&self, id: Uuid, owner_id: &str) -> Result<Option<StoredResume>, StoreError>;

    /// Persists a new resume; sets both timestamps and returns the assigned id.
    async fn create(&self, record: &ResumeRecord, owner_id: &str) -> Result<Uuid, StoreError>;

    /// Replaces the stored record and refreshes `updated_at`.
    async fn update(
        &self,
        id: Uuid,
        owner_id: &str,
        record: &ResumeRecord,
    ) -> Result<(), StoreError>;

    /// Irreversible.
    async fn delete(&self, id: Uuid, owner_id: &str) -> Result<(), StoreError>;
}
