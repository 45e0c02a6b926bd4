use aws_sdk_s3::primitives::ByteStream;

use crate::{adapters, model};

#[async_trait::async_trait]
impl adapters::ObjectStore for aws_sdk_s3::Client {
    async fn download_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Vec<u8>, model::error::StorageError> {
        let o = self
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| model::error::StorageError::Retrieval {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source: err.into(),
            })?;

        let bytes = o
            .body
            .collect()
            .await
            .map_err(|err| model::error::StorageError::Retrieval {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source: err.into(),
            })?;

        Ok(bytes.into_bytes().to_vec())
    }

    async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), model::error::StorageError> {
        self.put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|err| model::error::StorageError::Upload {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source: err.into(),
            })?;

        Ok(())
    }

    async fn bucket_names(&self) -> Result<Vec<String>, model::error::StorageError> {
        let lb = self
            .list_buckets()
            .send()
            .await
            .map_err(|err| model::error::StorageError::List { source: err.into() })?;

        let names = lb
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(|name| name.to_string()))
            .collect();

        Ok(names)
    }
}
