//! AWS Lambda hosting.
//!
//! Events arrive as raw JSON so that a payload that does not look like an
//! HTTP event still gets the standard 500 answer instead of a runtime fault.

use lambda_runtime::{service_fn, Error as LambdaError, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;

use crate::handlers::instances::RequestHandler;
use crate::response::OutboundResponse;

pub async fn run(handler: Arc<RequestHandler>) -> Result<(), LambdaError> {
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = handler.clone();
        async move { Ok::<_, LambdaError>(invoke(&handler, event).await) }
    }))
    .await
}

async fn invoke(handler: &RequestHandler, event: LambdaEvent<Value>) -> OutboundResponse {
    tracing::debug!(request_id = %event.context.request_id, "invocation");
    handler.handle_value(event.payload).await
}
