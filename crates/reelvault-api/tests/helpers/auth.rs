use reelvault_api::auth::jwt;
use uuid::Uuid;

use super::JWT_SECRET;

/// Mint a valid bearer token for `user_id`.
pub fn token_for(user_id: Uuid) -> String {
    jwt::issue_token(user_id, JWT_SECRET, 1).expect("Failed to issue token")
}

/// Mint an already-expired token for `user_id`.
pub fn expired_token_for(user_id: Uuid) -> String {
    jwt::issue_token(user_id, JWT_SECRET, -1).expect("Failed to issue token")
}

/// Authorization header value for `user_id`.
pub fn auth_header(user_id: Uuid) -> String {
    format!("Bearer {}", token_for(user_id))
}
