//! In-memory object store for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::traits::{ObjectStore, StorageError, StorageResult};

/// Object store implementation that holds objects in memory.
///
/// Uploads can be made to fail on demand, for exercising the pipeline's
/// failure paths.
#[derive(Clone)]
pub struct InMemoryObjectStore {
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    base_url: String,
    fail_uploads: Arc<AtomicBool>,
}

impl InMemoryObjectStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            objects: Arc::new(Mutex::new(HashMap::new())),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            fail_uploads: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent `put_object` fail.
    pub fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    pub fn has_object(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    pub fn get_object(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// Keys currently held, for test assertions.
    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        _content_type: &str,
    ) -> StorageResult<()> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(StorageError::UploadFailed(
                "upload failure injected".to_string(),
            ));
        }
        self.objects.lock().unwrap().insert(key.to_string(), data);
        Ok(())
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_get() {
        let store = InMemoryObjectStore::new("https://media.example.com");
        store
            .put_object("landscape/abc.mp4", vec![1, 2, 3], "video/mp4")
            .await
            .unwrap();
        assert_eq!(store.get_object("landscape/abc.mp4").unwrap(), vec![1, 2, 3]);
        assert_eq!(
            store.object_url("landscape/abc.mp4"),
            "https://media.example.com/landscape/abc.mp4"
        );
    }

    #[tokio::test]
    async fn test_injected_upload_failure() {
        let store = InMemoryObjectStore::new("https://media.example.com");
        store.set_fail_uploads(true);
        assert!(store
            .put_object("k", vec![0], "video/mp4")
            .await
            .is_err());
        assert_eq!(store.object_count(), 0);
    }
}
