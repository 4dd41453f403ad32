//! Thumbnail ingestion pipeline.

use std::sync::Arc;

use axum::extract::Multipart;
use reelvault_core::{AppError, Record};
use reelvault_db::RecordStore;
use reelvault_storage::{keys, LocalStorage};
use uuid::Uuid;

use crate::auth::{self, AuthUser};
use crate::error::storage_to_app;
use crate::ingest::read_file_field;

/// Ingests an image upload into local asset storage and swaps the owning
/// record's thumbnail locator.
#[derive(Clone)]
pub struct ThumbnailIngestor {
    records: Arc<dyn RecordStore>,
    assets: LocalStorage,
    max_size_bytes: usize,
}

impl ThumbnailIngestor {
    pub fn new(
        records: Arc<dyn RecordStore>,
        assets: LocalStorage,
        max_size_bytes: usize,
    ) -> Self {
        Self {
            records,
            assets,
            max_size_bytes,
        }
    }

    #[tracing::instrument(skip(self, user, multipart), fields(user_id = %user.id))]
    pub async fn ingest(
        &self,
        record_id: Uuid,
        user: &AuthUser,
        multipart: Multipart,
    ) -> Result<Record, AppError> {
        let mut record = self
            .records
            .get(record_id)
            .await
            .map_err(|e| AppError::Internal(format!("Record store error: {}", e)))?
            .ok_or_else(|| AppError::NotFound(format!("Record {} not found", record_id)))?;

        auth::ensure_owner(&record, user)?;

        let upload = read_file_field(multipart, "thumbnail", self.max_size_bytes).await?;

        // The extension lookup doubles as the content-type allow-list;
        // nothing is written for an unaccepted type. Video types are in
        // the list but have no business here.
        let ext = keys::extension_for(&upload.content_type).map_err(storage_to_app)?;
        if ext == ".mp4" {
            return Err(AppError::UnsupportedMediaType(
                "Only image uploads are accepted for thumbnails".to_string(),
            ));
        }
        let key = format!("{}{}", keys::new_asset_id(), ext);

        // The previous asset only matters if it lives in our storage and
        // is not the file we are about to write.
        let old_key = record
            .thumbnail_url
            .as_deref()
            .and_then(|url| self.assets.key_from_url(url))
            .filter(|old| old != &key);

        self.assets
            .write(&key, &upload.data)
            .await
            .map_err(storage_to_app)?;

        // Best-effort: a failed delete leaves an orphan, never a failed
        // request.
        if let Some(old) = old_key {
            if let Err(e) = self.assets.delete(&old).await {
                tracing::warn!(error = %e, key = %old, "Failed to delete superseded thumbnail");
            }
        }

        record.set_thumbnail_url(self.assets.public_url(&key));
        self.records
            .update(&record)
            .await
            .map_err(|e| AppError::Internal(format!("Record store error: {}", e)))?;

        tracing::info!(record_id = %record.id, key = %key, "Thumbnail ingested");

        Ok(record)
    }
}
