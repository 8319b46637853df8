use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use ec2_inventory_common::RESPONSE_HEADERS;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

/// HTTP-shaped result of one invocation, in the API Gateway proxy layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl OutboundResponse {
    fn with_body(status_code: u16, body: String) -> Self {
        Self {
            status_code,
            headers: RESPONSE_HEADERS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body,
        }
    }

    /// CORS preflight answer: 200, empty body.
    pub fn preflight() -> Self {
        Self::with_body(200, String::new())
    }

    pub fn ok(body: String) -> Self {
        Self::with_body(200, body)
    }

    pub fn error(category: &str, message: &str) -> Self {
        let body = json!({ "error": category, "message": message }).to_string();
        Self::with_body(500, body)
    }
}

impl IntoResponse for OutboundResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();
        let headers = response.headers_mut();
        for (name, value) in &self.headers {
            match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!("⚠️ dropping invalid response header {}", name),
            }
        }
        response
    }
}
