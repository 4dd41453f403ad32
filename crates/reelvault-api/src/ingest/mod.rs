//! The asset-ingestion pipelines.
//!
//! Both pipelines run their steps strictly sequentially within the
//! handling task and fail fast: any step's failure aborts the run and the
//! record keeps its previous locator. Temporary files are scoped to a
//! single run and removed on every exit path.

pub mod thumbnail;
pub mod video;

pub use thumbnail::ThumbnailIngestor;
pub use video::VideoIngestor;

use axum::extract::Multipart;
use bytes::Bytes;
use reelvault_core::AppError;

/// A single file field parsed out of a multipart form.
pub struct FileUpload {
    pub data: Bytes,
    pub content_type: String,
}

/// Read the one named file field from a multipart form, capping its size.
///
/// Other fields are drained and ignored. A missing field or an unreadable
/// form is the client's fault; an oversized body maps to the payload
/// ceiling.
pub async fn read_file_field(
    mut multipart: Multipart,
    field_name: &str,
    max_size_bytes: usize,
) -> Result<FileUpload, AppError> {
    let mut upload: Option<FileUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to parse multipart form: {}", e)))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                AppError::BadRequest(format!("Field '{}' has no content type", field_name))
            })?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {}", e)))?;

        if data.len() > max_size_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "File exceeds maximum allowed size of {} bytes",
                max_size_bytes
            )));
        }

        upload = Some(FileUpload { data, content_type });
    }

    upload.ok_or_else(|| {
        AppError::BadRequest(format!("Missing multipart field '{}'", field_name))
    })
}
