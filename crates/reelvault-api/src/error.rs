//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reelvault_core::{AppError, ErrorMetadata, LogLevel};
use reelvault_db::StoreError;
use reelvault_processing::ProcessingError;
use reelvault_storage::StorageError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from reelvault-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

/// Log errors based on their severity; causes stay server-side.
fn log_error(error: &AppError) {
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, code = code, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, code = code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, code = code, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = Json(ErrorResponse {
            error: app_error.client_message(),
            code: app_error.error_code().to_string(),
        });

        (status, body).into_response()
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        HttpAppError(storage_to_app(err))
    }
}

impl From<StoreError> for HttpAppError {
    fn from(err: StoreError) -> Self {
        HttpAppError(AppError::Internal(format!("Record store error: {}", err)))
    }
}

impl From<ProcessingError> for HttpAppError {
    fn from(err: ProcessingError) -> Self {
        HttpAppError(AppError::Internal(err.to_string()))
    }
}

/// Map a storage error into the AppError taxonomy. The allow-list
/// rejection is the only client-attributable failure; everything else is
/// an internal fault.
pub fn storage_to_app(err: StorageError) -> AppError {
    match err {
        StorageError::UnsupportedMediaType(ct) => AppError::UnsupportedMediaType(format!(
            "Content type '{}' is not accepted for upload",
            ct
        )),
        other => AppError::Internal(other.to_string()),
    }
}
