use std::collections::HashMap;
use std::sync::Mutex;

use crate::{adapters, model};

/// In-memory stand-in for a real provider client, used by the unit tests.
pub struct MockClient {
    buckets: Mutex<HashMap<String, HashMap<String, Vec<u8>>>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            buckets: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_buckets(names: &[&str]) -> Self {
        let mut buckets = HashMap::new();
        for name in names {
            buckets.insert(name.to_string(), HashMap::new());
        }

        Self {
            buckets: Mutex::new(buckets),
        }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl adapters::ObjectStore for MockClient {
    async fn download_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Vec<u8>, model::error::StorageError> {
        let buckets = self
            .buckets
            .lock()
            .expect("failed to acquire `buckets` guard");

        buckets
            .get(bucket)
            .and_then(|objects| objects.get(key))
            .cloned()
            .ok_or_else(|| model::error::StorageError::Retrieval {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source: "NoSuchKey".into(),
            })
    }

    async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), model::error::StorageError> {
        let mut buckets = self
            .buckets
            .lock()
            .expect("failed to acquire `buckets` guard");

        match buckets.get_mut(bucket) {
            Some(objects) => {
                objects.insert(key.to_string(), body);
                Ok(())
            }
            None => Err(model::error::StorageError::Upload {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source: "NoSuchBucket".into(),
            }),
        }
    }

    async fn bucket_names(&self) -> Result<Vec<String>, model::error::StorageError> {
        let buckets = self
            .buckets
            .lock()
            .expect("failed to acquire `buckets` guard");

        let mut names: Vec<String> = buckets.keys().cloned().collect();
        names.sort();

        Ok(names)
    }
}
