//! Lambda entrypoint for the productivity log API.
//!
//! Wires the ambient pieces together once per process: tracing, environment
//! configuration, the DynamoDB client, and the handler. Each invocation then
//! flows through [`LogHandler::handle`].

use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prodlog_api::event::{ApiGatewayEvent, ApiGatewayResponse};
use prodlog_api::storage::DynamoStore;
use prodlog_api::{AppConfig, CorsHeaders, LogHandler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber. CloudWatch stamps ingestion time, so
    // the fmt layer drops its own timestamps.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prodlog_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        table = %config.table_name,
        origin = %config.allowed_origin,
        "configuration loaded"
    );

    // One client per process, reused across invocations.
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = Arc::new(DynamoStore::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.table_name.clone(),
    ));
    let handler = LogHandler::new(store, CorsHeaders::new(config.allowed_origin));

    run(service_fn(|event| function_handler(&handler, event))).await
}

async fn function_handler(
    handler: &LogHandler,
    event: LambdaEvent<ApiGatewayEvent>,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handler.handle(event.payload).await)
}
