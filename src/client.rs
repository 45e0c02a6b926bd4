use std::env;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::Credentials;

use crate::model;

pub const ENV_ACCESS_KEY_ID: &str = "ACCESS_KEY_ID";
pub const ENV_SECRET_ACCESS_KEY: &str = "SECRET_ACCESS_KEY";
pub const ENV_REGION: &str = "REGION";

/// Static credentials and region for one client handle. Values are not
/// validated locally; bad credentials surface as provider errors on first
/// use.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
}

impl StorageConfig {
    /// Reads `ACCESS_KEY_ID`, `SECRET_ACCESS_KEY` and `REGION` from the
    /// process environment. An unset variable yields an empty string.
    pub fn from_env() -> Self {
        Self {
            access_key_id: env::var(ENV_ACCESS_KEY_ID).unwrap_or_default(),
            secret_access_key: env::var(ENV_SECRET_ACCESS_KEY).unwrap_or_default(),
            region: env::var(ENV_REGION).unwrap_or_default(),
        }
    }
}

/// Builds a client handle from static credentials. The handle is reusable
/// for the process lifetime and has no teardown operation; token refresh is
/// not managed here.
pub async fn create_client(
    config: &StorageConfig,
) -> Result<aws_sdk_s3::Client, model::error::StorageError> {
    let credentials = Credentials::new(
        &config.access_key_id,
        &config.secret_access_key,
        None,
        None,
        "s3util",
    );

    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .credentials_provider(credentials)
        .load()
        .await;

    Ok(aws_sdk_s3::Client::new(&aws_config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var(ENV_ACCESS_KEY_ID, "AKIATEST");
        env::set_var(ENV_SECRET_ACCESS_KEY, "testsecret");
        env::set_var(ENV_REGION, "us-east-1");

        let config = StorageConfig::from_env();
        assert_eq!(config.access_key_id, "AKIATEST");
        assert_eq!(config.secret_access_key, "testsecret");
        assert_eq!(config.region, "us-east-1");

        env::remove_var(ENV_ACCESS_KEY_ID);
        env::remove_var(ENV_SECRET_ACCESS_KEY);
        env::remove_var(ENV_REGION);

        let config = StorageConfig::from_env();
        assert_eq!(config.access_key_id, "");
        assert_eq!(config.secret_access_key, "");
        assert_eq!(config.region, "");
    }

    #[tokio::test]
    async fn test_create_client_with_empty_config() {
        let config = StorageConfig {
            access_key_id: String::new(),
            secret_access_key: String::new(),
            region: String::new(),
        };

        let result = create_client(&config).await;
        assert!(result.is_ok());
    }
}
