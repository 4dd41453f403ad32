//! Video ingestion pipeline.

use std::sync::Arc;

use axum::extract::Multipart;
use reelvault_core::{AppError, Record};
use reelvault_db::RecordStore;
use reelvault_processing::{AspectClass, MediaProber, MediaRemuxer};
use reelvault_storage::{keys, ObjectStore};
use uuid::Uuid;

use crate::auth::{self, AuthUser};
use crate::error::storage_to_app;
use crate::ingest::read_file_field;

const VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// Ingests a video upload: stages it to a temporary file, probes its
/// geometry, remuxes it for progressive playback, uploads the result to
/// the object store under a classification-prefixed key, and swaps the
/// owning record's video locator.
#[derive(Clone)]
pub struct VideoIngestor {
    records: Arc<dyn RecordStore>,
    objects: Arc<dyn ObjectStore>,
    prober: Arc<dyn MediaProber>,
    remuxer: Arc<dyn MediaRemuxer>,
    max_size_bytes: usize,
}

impl VideoIngestor {
    pub fn new(
        records: Arc<dyn RecordStore>,
        objects: Arc<dyn ObjectStore>,
        prober: Arc<dyn MediaProber>,
        remuxer: Arc<dyn MediaRemuxer>,
        max_size_bytes: usize,
    ) -> Self {
        Self {
            records,
            objects,
            prober,
            remuxer,
            max_size_bytes,
        }
    }

    #[tracing::instrument(skip(self, user, multipart), fields(user_id = %user.id))]
    pub async fn ingest(
        &self,
        record_id: Uuid,
        user: &AuthUser,
        declared_len: Option<u64>,
        multipart: Multipart,
    ) -> Result<Record, AppError> {
        let mut record = self
            .records
            .get(record_id)
            .await
            .map_err(|e| AppError::Internal(format!("Record store error: {}", e)))?
            .ok_or_else(|| AppError::NotFound(format!("Record {} not found", record_id)))?;

        auth::ensure_owner(&record, user)?;

        // The declared size is checked before a single byte is read, let
        // alone staged.
        if let Some(len) = declared_len {
            if len > self.max_size_bytes as u64 {
                return Err(AppError::PayloadTooLarge(format!(
                    "Declared size {} exceeds maximum of {} bytes",
                    len, self.max_size_bytes
                )));
            }
        }

        let upload = read_file_field(multipart, "video", self.max_size_bytes).await?;

        if keys::extension_for(&upload.content_type).map_err(storage_to_app)? != ".mp4" {
            return Err(AppError::UnsupportedMediaType(format!(
                "Only {} is accepted for video upload",
                VIDEO_CONTENT_TYPE
            )));
        }

        // Both temp files are dropped, and therefore deleted, on every
        // exit path of this function.
        let staging = tempfile::Builder::new()
            .prefix("reelvault-upload")
            .suffix(".mp4")
            .tempfile()
            .map_err(|e| AppError::Internal(format!("Failed to create staging file: {}", e)))?;

        tokio::fs::write(staging.path(), &upload.data)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to stage upload: {}", e)))?;

        let geometry = self
            .prober
            .probe_geometry(staging.path())
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let class = AspectClass::from_dimensions(geometry.width, geometry.height);

        let remuxed = tempfile::Builder::new()
            .prefix("reelvault-faststart")
            .suffix(".mp4")
            .tempfile()
            .map_err(|e| AppError::Internal(format!("Failed to create remux file: {}", e)))?;

        self.remuxer
            .remux_faststart(staging.path(), remuxed.path())
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let remuxed_data = tokio::fs::read(remuxed.path())
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read remuxed file: {}", e)))?;

        let key = format!(
            "{}/{}",
            class.folder(),
            keys::new_asset_key(VIDEO_CONTENT_TYPE).map_err(storage_to_app)?
        );

        self.objects
            .put_object(&key, remuxed_data, VIDEO_CONTENT_TYPE)
            .await
            .map_err(storage_to_app)?;

        record.set_video_url(self.objects.object_url(&key));
        self.records
            .update(&record)
            .await
            .map_err(|e| AppError::Internal(format!("Record store error: {}", e)))?;

        tracing::info!(
            record_id = %record.id,
            key = %key,
            width = geometry.width,
            height = geometry.height,
            class = %class,
            "Video ingested"
        );

        Ok(record)
    }
}
