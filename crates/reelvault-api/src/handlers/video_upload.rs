//! Video upload endpoint.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderMap},
    Json,
};
use reelvault_core::RecordResponse;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::error::HttpAppError;
use crate::state::AppState;

/// `POST /api/records/{record_id}/video`
///
/// Multipart body with a single `video` file field. The request's
/// declared Content-Length is checked against the upload ceiling before
/// the body is read. Returns the updated record.
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    Path(record_id): Path<Uuid>,
    user: AuthUser,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Json<RecordResponse>, HttpAppError> {
    let declared_len = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok());

    let record = state
        .videos
        .ingest(record_id, &user, declared_len, multipart)
        .await
        .map_err(HttpAppError)?;

    Ok(Json(record.into()))
}
