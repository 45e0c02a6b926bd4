use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure kinds of the storage layer. Every variant keeps the underlying
/// provider error as its `source`.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to load storage config: {source}")]
    Config { source: BoxError },

    #[error("failed to get object at: {bucket}/{key}, {source}")]
    Retrieval {
        bucket: String,
        key: String,
        source: BoxError,
    },

    #[error("failed to put object at: {bucket}/{key}, {source}")]
    Upload {
        bucket: String,
        key: String,
        source: BoxError,
    },

    #[error("failed to list buckets, {source}")]
    List { source: BoxError },
}
