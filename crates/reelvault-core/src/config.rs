//! Configuration module
//!
//! All runtime configuration is loaded from the environment once at startup
//! and passed into components at construction; nothing reads env vars after
//! that point.

use std::env;

const DEFAULT_PORT: u16 = 8091;
const JWT_EXPIRY_HOURS: i64 = 24;
const MAX_THUMBNAIL_SIZE_MB: usize = 10;
const MAX_VIDEO_SIZE_MB: usize = 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,

    // Local asset storage (thumbnails)
    pub asset_root: String,
    pub asset_base_url: String,

    // Object store (video)
    pub s3_bucket: String,
    pub s3_region: String,
    pub s3_endpoint: Option<String>,
    pub s3_public_base_url: Option<String>,

    // External media tools
    pub ffmpeg_path: String,
    pub ffprobe_path: String,

    // Upload ceilings
    pub max_thumbnail_size_bytes: usize,
    pub max_video_size_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        // Load .env if present; real environment wins.
        dotenvy::dotenv().ok();

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET must be set for authentication"))?,
            jwt_expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| JWT_EXPIRY_HOURS.to_string())
                .parse()
                .unwrap_or(JWT_EXPIRY_HOURS),
            asset_root: env::var("ASSET_ROOT").unwrap_or_else(|_| "./assets".to_string()),
            asset_base_url: env::var("ASSET_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{}/assets", DEFAULT_PORT)),
            s3_bucket: env::var("S3_BUCKET")
                .map_err(|_| anyhow::anyhow!("S3_BUCKET must be set"))?,
            s3_region: env::var("S3_REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .map_err(|_| anyhow::anyhow!("S3_REGION or AWS_REGION must be set"))?,
            s3_endpoint: env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
            s3_public_base_url: env::var("S3_PUBLIC_BASE_URL")
                .ok()
                .filter(|s| !s.is_empty()),
            ffmpeg_path: env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string()),
            ffprobe_path: env::var("FFPROBE_PATH").unwrap_or_else(|_| "ffprobe".to_string()),
            max_thumbnail_size_bytes: env::var("MAX_THUMBNAIL_SIZE_MB")
                .unwrap_or_else(|_| MAX_THUMBNAIL_SIZE_MB.to_string())
                .parse::<usize>()
                .unwrap_or(MAX_THUMBNAIL_SIZE_MB)
                * 1024
                * 1024,
            max_video_size_bytes: env::var("MAX_VIDEO_SIZE_MB")
                .unwrap_or_else(|_| MAX_VIDEO_SIZE_MB.to_string())
                .parse::<usize>()
                .unwrap_or(MAX_VIDEO_SIZE_MB)
                * 1024
                * 1024,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < 32 {
            return Err(anyhow::anyhow!(
                "JWT_SECRET must be at least 32 characters long"
            ));
        }

        if !self.database_url.starts_with("postgresql://")
            && !self.database_url.starts_with("postgres://")
        {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be a valid PostgreSQL connection string"
            ));
        }

        if self.s3_bucket.is_empty() {
            return Err(anyhow::anyhow!("S3_BUCKET must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server_port: DEFAULT_PORT,
            database_url: "postgresql://localhost/reelvault".into(),
            jwt_secret: "0123456789abcdef0123456789abcdef".into(),
            jwt_expiry_hours: JWT_EXPIRY_HOURS,
            asset_root: "./assets".into(),
            asset_base_url: "http://localhost:8091/assets".into(),
            s3_bucket: "reelvault-media".into(),
            s3_region: "us-east-2".into(),
            s3_endpoint: None,
            s3_public_base_url: None,
            ffmpeg_path: "ffmpeg".into(),
            ffprobe_path: "ffprobe".into(),
            max_thumbnail_size_bytes: MAX_THUMBNAIL_SIZE_MB * 1024 * 1024,
            max_video_size_bytes: MAX_VIDEO_SIZE_MB * 1024 * 1024,
        }
    }

    #[test]
    fn test_validate_accepts_sane_config() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_jwt_secret() {
        let mut config = test_config();
        config.jwt_secret = "short".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_postgres_url() {
        let mut config = test_config();
        config.database_url = "mysql://localhost/reelvault".into();
        assert!(config.validate().is_err());
    }
}
