//! Local filesystem storage for thumbnail assets.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::traits::{StorageError, StorageResult};

/// Local filesystem storage rooted at a configured directory, with a
/// configured public base URL for locator derivation.
#[derive(Clone)]
pub struct LocalStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance, creating the root directory if
    /// it does not exist.
    pub async fn new(root: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let root = root.into();

        fs::create_dir_all(&root).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create asset directory {}: {}",
                root.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            root,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Convert a storage key to an on-disk path.
    ///
    /// Keys must not escape the asset root.
    pub fn key_to_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() || key.contains("..") || key.starts_with('/') {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }

    /// Public URL for a storage key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    /// Map a public URL back to its storage key, if the URL points into
    /// this storage's base URL. Foreign URLs yield `None`.
    pub fn key_from_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(&self.base_url)
            .map(|rest| rest.trim_start_matches('/').to_string())
            .filter(|key| !key.is_empty())
    }

    /// Create the file for `key` and write the full body into it.
    ///
    /// A partial write leaves the file behind; callers must not swap any
    /// locator onto it in that case.
    pub async fn write(&self, key: &str, data: &[u8]) -> StorageResult<()> {
        let path = self.key_to_path(key)?;
        self.ensure_parent_dir(&path).await?;

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::debug!(key = %key, size_bytes = data.len(), "Asset written");
        Ok(())
    }

    /// Delete the file for `key`.
    pub async fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.key_to_path(key)?;
        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    /// Whether the file for `key` exists.
    pub async fn exists(&self, key: &str) -> StorageResult<bool> {
        let path = self.key_to_path(key)?;
        Ok(fs::try_exists(&path).await?)
    }

    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}
