//! Storage abstraction trait
//!
//! This module defines the ObjectStore trait the video pipeline uploads
//! through, and the error type shared by all storage backends.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Object store abstraction.
///
/// The video pipeline only needs to put bytes under a key and derive the
/// public locator for that key; backends stay swappable for tests.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload an object under the given key. No retry is performed; a
    /// transient failure surfaces directly to the caller.
    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<()>;

    /// Public URL for an object key.
    fn object_url(&self, key: &str) -> String;
}
