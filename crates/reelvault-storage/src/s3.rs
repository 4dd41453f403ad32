//! S3 object store implementation

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;

use crate::traits::{ObjectStore, StorageError, StorageResult};

/// S3 storage implementation
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    region: String,
    public_base_url: Option<String>,
}

impl S3ObjectStore {
    /// Create a new S3ObjectStore.
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    /// * `public_base_url` - Optional base URL for public locators (e.g., a
    ///   CDN distribution); falls back to the standard S3 URL format
    pub async fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
        public_base_url: Option<String>,
    ) -> StorageResult<Self> {
        let region_provider =
            RegionProviderChain::first_try(aws_config::Region::new(region.clone()));

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;

        // S3-compatible providers need a custom endpoint and path-style addressing.
        let client = if let Some(ref endpoint) = endpoint_url {
            let mut builder = aws_sdk_s3::Config::builder()
                .endpoint_url(endpoint)
                .region(config.region().cloned())
                .force_path_style(true);
            if let Some(provider) = config.credentials_provider().into_iter().next() {
                builder = builder.credentials_provider(provider);
            }
            Client::from_conf(builder.build())
        } else {
            Client::new(&config)
        };

        Ok(S3ObjectStore {
            client,
            bucket,
            region,
            public_base_url: public_base_url.map(|u| u.trim_end_matches('/').to_string()),
        })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<()> {
        let size = data.len() as u64;
        let body = ByteStream::from(Bytes::from(data));

        let start = std::time::Instant::now();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 upload failed"
                );
                StorageError::UploadFailed(format!("S3 put_object for {} failed: {}", key, e))
            })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload complete"
        );

        Ok(())
    }

    fn object_url(&self, key: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{}/{}", base, key),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            ),
        }
    }
}
