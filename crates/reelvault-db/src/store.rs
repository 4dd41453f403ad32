//! The record store contract.

use async_trait::async_trait;
use reelvault_core::Record;
use thiserror::Error;
use uuid::Uuid;

/// Record store operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Opaque get/update contract over record persistence.
///
/// There is no concurrency control on a record's locator fields: two
/// concurrent updates interleave and the last write wins.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch a record by id.
    async fn get(&self, id: Uuid) -> StoreResult<Option<Record>>;

    /// Persist a record's current state.
    async fn update(&self, record: &Record) -> StoreResult<()>;

    /// Create a new record.
    async fn create(&self, record: &Record) -> StoreResult<()>;
}
