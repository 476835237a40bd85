use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use storage_search_core::{JsonFileCatalog, ListingCatalog, SearchConfig};
use storage_search_lambda::adapters::object_store::{ObjectReader, ObjectStoreCatalog};
use storage_search_lambda::config::{CatalogSource, ServiceConfig};
use storage_search_lambda::handlers::search::{handle_search_event, ApiGatewayResponse};
use storage_search_lambda::telemetry::init_tracing;

struct S3ObjectReader {
    bucket: String,
    s3_client: S3Client,
}

impl ObjectReader for S3ObjectReader {
    fn read_object(&self, key: &str) -> Result<Vec<u8>, String> {
        let bucket = self.bucket.clone();
        let object_key = key.to_string();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let object = client
                    .get_object()
                    .bucket(&bucket)
                    .key(&object_key)
                    .send()
                    .await
                    .map_err(|error| format!("failed to read s3://{bucket}/{object_key}: {error}"))?;
                object
                    .body
                    .collect()
                    .await
                    .map(|data| data.into_bytes().to_vec())
                    .map_err(|error| format!("failed to stream s3://{bucket}/{object_key}: {error}"))
            })
        })
    }
}

struct RuntimeDependencies {
    catalog: Box<dyn ListingCatalog>,
    search: SearchConfig,
}

async fn build_dependencies(config: ServiceConfig) -> RuntimeDependencies {
    let catalog: Box<dyn ListingCatalog> = match config.catalog {
        CatalogSource::ObjectStore { bucket, key } => {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            Box::new(ObjectStoreCatalog::new(
                S3ObjectReader {
                    bucket,
                    s3_client: S3Client::new(&aws_config),
                },
                key,
            ))
        }
        CatalogSource::File { path } => Box::new(JsonFileCatalog::new(path)),
    };
    RuntimeDependencies {
        catalog,
        search: config.search,
    }
}

async fn handle_request(
    event: LambdaEvent<Value>,
    deps: &RuntimeDependencies,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_search_event(
        event.payload,
        deps.catalog.as_ref(),
        &deps.search,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing(true);

    let config = ServiceConfig::from_env().map_err(|error| Error::from(error.message().to_string()))?;
    tracing::info!(catalog = ?config.catalog, search = ?config.search, "starting listing search");
    let deps = build_dependencies(config).await;

    lambda_runtime::run(service_fn(|event| handle_request(event, &deps))).await
}
