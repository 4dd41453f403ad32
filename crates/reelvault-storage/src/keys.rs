//! Asset key generation and the upload content-type allow-list.
//!
//! Keys are `{random_id}{extension}` where the id is drawn from a CSPRNG
//! and the extension comes from the accepted content-type set. This lookup
//! is the authoritative allow-list: both ingestion pipelines consult it
//! before any byte is written to storage.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::Rng;

use crate::traits::{StorageError, StorageResult};

/// Maximum length of the random id portion of a key, bounding key length
/// regardless of encoding expansion.
const MAX_ID_LEN: usize = 32;

/// Map an accepted content type to its filename extension.
///
/// Media-type parameters (`video/mp4; codecs=...`) are stripped before the
/// lookup. Anything outside the accepted set is rejected.
pub fn extension_for(content_type: &str) -> StorageResult<&'static str> {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match media_type.as_str() {
        "image/jpeg" => Ok(".jpg"),
        "image/png" => Ok(".png"),
        "video/mp4" => Ok(".mp4"),
        other => Err(StorageError::UnsupportedMediaType(other.to_string())),
    }
}

/// Generate a collision-resistant opaque asset id: 32 random bytes,
/// URL-safe base64, truncated to at most 32 characters.
pub fn new_asset_id() -> String {
    let mut rng = rand::rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.random()).collect();

    let mut id = URL_SAFE_NO_PAD.encode(&random_bytes);
    id.truncate(MAX_ID_LEN);
    id
}

/// Generate a storage key for the given content type: `{id}{ext}`.
pub fn new_asset_key(content_type: &str) -> StorageResult<String> {
    let ext = extension_for(content_type)?;
    Ok(format!("{}{}", new_asset_id(), ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_id_length_is_bounded() {
        for _ in 0..64 {
            assert!(new_asset_id().len() <= MAX_ID_LEN);
        }
    }

    #[test]
    fn test_asset_id_is_url_safe() {
        let id = new_asset_id();
        assert!(id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(extension_for("image/jpeg").unwrap(), ".jpg");
        assert_eq!(extension_for("image/png").unwrap(), ".png");
        assert_eq!(extension_for("video/mp4").unwrap(), ".mp4");
    }

    #[test]
    fn test_media_type_parameters_are_stripped() {
        assert_eq!(
            extension_for("video/mp4; codecs=\"avc1.42E01E\"").unwrap(),
            ".mp4"
        );
        assert_eq!(extension_for("IMAGE/PNG").unwrap(), ".png");
    }

    #[test]
    fn test_unsupported_content_type_is_rejected() {
        for ct in ["image/gif", "video/webm", "text/html", "", "application/octet-stream"] {
            assert!(matches!(
                extension_for(ct),
                Err(StorageError::UnsupportedMediaType(_))
            ));
        }
    }

    #[test]
    fn test_keys_do_not_collide() {
        let a = new_asset_key("image/png").unwrap();
        let b = new_asset_key("image/png").unwrap();
        assert_ne!(a, b);
        assert!(a.ends_with(".png"));
    }
}
