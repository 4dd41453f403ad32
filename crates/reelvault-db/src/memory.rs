//! In-memory record store for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reelvault_core::Record;
use uuid::Uuid;

use crate::store::{RecordStore, StoreError, StoreResult};

/// Record store implementation that holds records in memory.
///
/// Updates can be made to fail on demand, for exercising the pipelines'
/// persistence-failure paths.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<Mutex<HashMap<Uuid, Record>>>,
    fail_updates: Arc<AtomicBool>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `update` fail.
    pub fn set_fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    /// Insert a record directly, bypassing the trait (test setup).
    pub fn insert(&self, record: Record) {
        self.records.lock().unwrap().insert(record.id, record);
    }

    /// Read a record directly (test assertions).
    pub fn get_sync(&self, id: Uuid) -> Option<Record> {
        self.records.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn get(&self, id: Uuid) -> StoreResult<Option<Record>> {
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, record: &Record) -> StoreResult<()> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "update failure injected".to_string(),
            ));
        }
        self.records
            .lock()
            .unwrap()
            .insert(record.id, record.clone());
        Ok(())
    }

    async fn create(&self, record: &Record) -> StoreResult<()> {
        self.records
            .lock()
            .unwrap()
            .insert(record.id, record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_update_round_trip() {
        let store = InMemoryRecordStore::new();
        let mut record = Record::new(Uuid::new_v4(), "clip".into(), "".into());
        store.create(&record).await.unwrap();

        record.set_video_url("https://media.example.com/other/k.mp4".into());
        store.update(&record).await.unwrap();

        let fetched = store.get(record.id).await.unwrap().unwrap();
        assert_eq!(
            fetched.video_url.as_deref(),
            Some("https://media.example.com/other/k.mp4")
        );
    }

    #[tokio::test]
    async fn test_injected_update_failure() {
        let store = InMemoryRecordStore::new();
        let record = Record::new(Uuid::new_v4(), "clip".into(), "".into());
        store.create(&record).await.unwrap();
        store.set_fail_updates(true);
        assert!(store.update(&record).await.is_err());
    }
}
