//! Bearer-credential middleware.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use reelvault_core::AppError;

use crate::auth::jwt;
use crate::auth::models::AuthUser;
use crate::error::HttpAppError;
use crate::state::AppState;

/// Extract the bearer token from an Authorization header value.
fn bearer_token(auth_header: &str) -> Result<&str, AppError> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            AppError::Unauthenticated("Invalid authorization header format".to_string())
        })
}

/// Middleware authenticating requests with a bearer JWT.
///
/// Runs before either ingestion pipeline and short-circuits on failure;
/// on success the resolved identity is inserted into request extensions.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            return HttpAppError(AppError::Unauthenticated(
                "Missing authorization header".to_string(),
            ))
            .into_response();
        }
    };

    let token = match bearer_token(auth_header) {
        Ok(t) => t,
        Err(e) => return HttpAppError(e).into_response(),
    };

    let user_id = match jwt::validate_token(token, &state.config.jwt_secret) {
        Ok(id) => id,
        Err(e) => return HttpAppError(e).into_response(),
    };

    request.extensions_mut().insert(AuthUser { id: user_id });

    next.run(request).await
}
