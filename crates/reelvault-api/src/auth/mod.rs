//! Bearer-credential authentication and record ownership checks.

pub mod jwt;
pub mod middleware;
pub mod models;

pub use jwt::{issue_token, validate_token};
pub use models::AuthUser;

use reelvault_core::{AppError, Record};

/// Check that `user` owns `record`. Pure validation; no side effects.
pub fn ensure_owner(record: &Record, user: &AuthUser) -> Result<(), AppError> {
    if record.owner_id != user.id {
        return Err(AppError::Forbidden(
            "You do not own this record".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_owner_passes() {
        let owner = Uuid::new_v4();
        let record = Record::new(owner, "clip".into(), "".into());
        assert!(ensure_owner(&record, &AuthUser { id: owner }).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let record = Record::new(Uuid::new_v4(), "clip".into(), "".into());
        let result = ensure_owner(&record, &AuthUser { id: Uuid::new_v4() });
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }
}
