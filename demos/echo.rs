//! Minimal echo function showing per-invocation handler setup.

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::{json, Value};

async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();

    let subscriber = tracing_lambda::builder()
        .with_lambda_context(&context)
        .with_env_vars(["AWS_REGION", "AWS_LAMBDA_FUNCTION_MEMORY_SIZE"])
        .build();

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("handling invocation");
    });

    Ok(json!({ "echo": payload }))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handler)).await
}
