//! HS256 JWT issuance and validation against a shared secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use reelvault_core::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid, // user_id
    pub iat: i64,  // issued at timestamp
    pub exp: i64,  // expiration timestamp
}

/// Issue a signed token for `user_id`, expiring after `expiry_hours`.
pub fn issue_token(user_id: Uuid, secret: &str, expiry_hours: i64) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        iat: now.timestamp(),
        exp: (now + Duration::hours(expiry_hours)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
}

/// Validate a token's signature and expiry, resolving the acting identity.
///
/// Every validation failure collapses to `Unauthenticated`; the caller
/// learns nothing about which check failed.
pub fn validate_token(token: &str, secret: &str) -> Result<Uuid, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthenticated("Invalid or expired token".to_string()))?;

    Ok(data.claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn test_issue_then_validate() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, SECRET, 1).unwrap();
        assert_eq!(validate_token(&token, SECRET).unwrap(), user_id);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue_token(Uuid::new_v4(), SECRET, 1).unwrap();
        let result = validate_token(&token, "another-secret-another-secret-xx");
        assert!(matches!(result, Err(AppError::Unauthenticated(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = issue_token(Uuid::new_v4(), SECRET, -1).unwrap();
        let result = validate_token(&token, SECRET);
        assert!(matches!(result, Err(AppError::Unauthenticated(_))));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(validate_token("not.a.jwt", SECRET).is_err());
        assert!(validate_token("", SECRET).is_err());
    }
}
