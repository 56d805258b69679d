use super::storage_repository::AudioStorageRepository;
use async_trait::async_trait;
use aws_sdk_s3::{presigning::PresigningConfig, primitives::ByteStream, Client as S3Client};
use std::sync::Arc;
use std::time::Duration;

/// AWS S3 implementation of the audio storage repository
pub struct S3StorageRepository {
    s3_client: Arc<S3Client>,
    bucket: String,
}

impl S3StorageRepository {
    pub fn new(s3_client: Arc<S3Client>, bucket: String) -> Self {
        Self { s3_client, bucket }
    }
}

#[async_trait]
impl AudioStorageRepository for S3StorageRepository {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), String> {
        tracing::info!(
            bucket = %self.bucket,
            key,
            size_bytes = bytes.len(),
            content_type,
            "Uploading audio artifact to S3"
        );

        self.s3_client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    bucket = %self.bucket,
                    key,
                    "S3 put_object failed"
                );
                format!("S3 put_object error: {:?}", e)
            })?;

        tracing::debug!(key, "Audio artifact uploaded");

        Ok(())
    }

    async fn presign(&self, key: &str, expires_in: Duration) -> Result<String, String> {
        let presigning_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| format!("Invalid presigning configuration: {}", e))?;

        let presigned = self
            .s3_client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    bucket = %self.bucket,
                    key,
                    "S3 presigning failed"
                );
                format!("S3 presign error: {:?}", e)
            })?;

        let url = presigned.uri().to_string();

        tracing::debug!(
            key,
            expires_in_secs = expires_in.as_secs(),
            "Presigned download URL issued"
        );

        Ok(url)
    }

    async fn check_bucket(&self) -> Result<(), String> {
        self.s3_client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| format!("S3 head_bucket error: {:?}", e))?;

        Ok(())
    }
}
