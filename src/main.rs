use s3util::adapters::ObjectStore;
use s3util::client;
use tracing::{error, info, span, Level};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().json().init();

    let span = span!(Level::INFO, "main", context = "main");
    let _e = span.enter();
    info!("called");

    let config = client::StorageConfig::from_env();
    let s3 = match client::create_client(&config).await {
        Ok(s3) => s3,
        Err(err) => {
            error!(error = err.to_string(), "failed to create client");
            std::process::exit(1);
        }
    };

    match s3.bucket_names().await {
        Ok(names) => {
            for name in names {
                info!(bucket = name, "bucket");
            }
        }
        Err(err) => {
            error!(error = err.to_string(), "failed to list buckets");
            std::process::exit(1);
        }
    }
}
