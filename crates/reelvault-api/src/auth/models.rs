use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use reelvault_core::AppError;
use uuid::Uuid;

use crate::error::HttpAppError;

/// The acting identity resolved from a validated bearer credential,
/// stored in request extensions by the auth middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
}

// Extension cannot be combined with Multipart in a handler signature, so
// we extract directly from request parts.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().copied().ok_or_else(|| {
            HttpAppError(AppError::Unauthenticated(
                "Missing authentication context".to_string(),
            ))
        })
    }
}
