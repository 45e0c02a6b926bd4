use crate::model;

pub mod mock;
pub mod s3;

/// Seam between callers and a concrete storage provider. Implemented
/// directly on the provider client; the handle is safe to share across
/// concurrent operations.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetches the full body of `bucket`/`key` into memory. There is no
    /// size limit or streaming option, so usable object size is bounded by
    /// available memory.
    async fn download_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Vec<u8>, model::error::StorageError>;

    /// Uploads `body` as the full content of `bucket`/`key` in a single
    /// request, replacing any object already at that locator.
    async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), model::error::StorageError>;

    /// Names of the buckets visible to the authenticated identity. Single
    /// response, no pagination, order unspecified.
    async fn bucket_names(&self) -> Result<Vec<String>, model::error::StorageError>;
}
