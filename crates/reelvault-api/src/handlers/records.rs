//! Record creation and retrieval.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use reelvault_core::{AppError, Record, RecordResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::error::HttpAppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

pub async fn create_record(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<CreateRecordRequest>,
) -> Result<Json<RecordResponse>, HttpAppError> {
    if req.title.trim().is_empty() {
        return Err(HttpAppError(AppError::BadRequest(
            "Title must not be empty".to_string(),
        )));
    }

    let record = Record::new(user.id, req.title, req.description);
    state.records.create(&record).await?;

    tracing::info!(record_id = %record.id, owner_id = %user.id, "Record created");

    Ok(Json(record.into()))
}

pub async fn get_record(
    State(state): State<Arc<AppState>>,
    Path(record_id): Path<Uuid>,
    _user: AuthUser,
) -> Result<Json<RecordResponse>, HttpAppError> {
    let record = state
        .records
        .get(record_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Record {} not found", record_id)))?;

    Ok(Json(record.into()))
}
