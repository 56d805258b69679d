use async_trait::async_trait;
use std::time::Duration;

/// Repository for audio artifact storage.
/// Abstracts the underlying object store (AWS S3 or compatible).
///
/// Artifacts are written once and never updated or deleted by this service;
/// only the download URLs expire.
#[async_trait]
pub trait AudioStorageRepository: Send + Sync {
    /// Store an artifact under the given key, fully buffered
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), String>;

    /// Issue a time-limited signed download URL for a stored artifact
    async fn presign(&self, key: &str, expires_in: Duration) -> Result<String, String>;

    /// Verify the backing bucket is reachable (readiness probe)
    async fn check_bucket(&self) -> Result<(), String>;
}
