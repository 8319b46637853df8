use ec2_inventory_common::{INTERNAL_ERROR_CATEGORY, PROVIDER_ERROR_CATEGORY};
use ec2_inventory_providers::ProviderError;

use crate::response::OutboundResponse;

/// Why the list path failed. Both kinds end the invocation with a 500.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl HandlerError {
    pub fn category(&self) -> &'static str {
        match self {
            HandlerError::Provider(_) => PROVIDER_ERROR_CATEGORY,
            HandlerError::Internal(_) => INTERNAL_ERROR_CATEGORY,
        }
    }

    /// Diagnostic text returned to the caller. Internal errors carry their
    /// whole context chain.
    pub fn diagnostic(&self) -> String {
        match self {
            HandlerError::Provider(e) => e.to_string(),
            HandlerError::Internal(e) => format!("{e:#}"),
        }
    }

    /// Log the raw diagnostic, then map to the fixed 500 response.
    pub fn into_response(self) -> OutboundResponse {
        let message = self.diagnostic();
        match &self {
            HandlerError::Provider(_) => tracing::error!("AWS Error: {}", message),
            HandlerError::Internal(_) => tracing::error!("Error: {}", message),
        }
        OutboundResponse::error(self.category(), &message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn provider_errors_map_to_fetch_category() {
        let err = HandlerError::from(ProviderError::Api {
            operation: "DescribeInstances",
            code: "RequestLimitExceeded".to_string(),
            message: "Request limit exceeded.".to_string(),
        });
        assert_eq!(err.category(), "Failed to fetch EC2 instances");

        let resp = err.into_response();
        assert_eq!(resp.status_code, 500);
        let body: serde_json::Value = serde_json::from_str(&resp.body).unwrap();
        assert_eq!(body["error"], "Failed to fetch EC2 instances");
        assert_eq!(
            body["message"],
            "An error occurred (RequestLimitExceeded) when calling the DescribeInstances operation: Request limit exceeded."
        );
    }

    #[test]
    fn internal_errors_keep_the_whole_chain() {
        let source: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"));
        let err = HandlerError::from(source.context("writing body").unwrap_err());
        assert_eq!(err.category(), "Internal server error");
        assert_eq!(err.diagnostic(), "writing body: disk on fire");
    }
}
