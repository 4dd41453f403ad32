//! Thumbnail upload endpoint.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use reelvault_core::RecordResponse;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::error::HttpAppError;
use crate::state::AppState;

/// `POST /api/records/{record_id}/thumbnail`
///
/// Multipart body with a single `thumbnail` file field. Returns the
/// updated record.
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    Path(record_id): Path<Uuid>,
    user: AuthUser,
    multipart: Multipart,
) -> Result<Json<RecordResponse>, HttpAppError> {
    let record = state
        .thumbnails
        .ingest(record_id, &user, multipart)
        .await
        .map_err(HttpAppError)?;

    Ok(Json(record.into()))
}
