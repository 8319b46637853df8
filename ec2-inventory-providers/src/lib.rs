use async_trait::async_trait;

/// Failure surfaced by a compute provider.
///
/// Anything returned through this type is reported to callers as a provider
/// failure, as opposed to a failure of the request handling around it.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ProviderError {
    /// The service answered with an error code (auth failure, throttling,
    /// unknown region, ...).
    #[error("An error occurred ({code}) when calling the {operation} operation: {message}")]
    Api {
        operation: &'static str,
        code: String,
        message: String,
    },
    /// The request never produced a service answer (dispatch, timeout, or
    /// an unparseable response).
    #[error("{0}")]
    Transport(String),
    /// The service answered but the data cannot be represented.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait ComputeProvider: Send + Sync {
    /// Short provider code used in logs ("aws", "mock").
    fn name(&self) -> &'static str;

    /// Single DescribeInstances call for the provider's configured region.
    ///
    /// Reservations come back in provider order. There is no pagination
    /// follow-up: a truncated first page is returned as-is.
    async fn describe_instances(&self) -> Result<Vec<inventory::Reservation>, ProviderError>;
}

/// Provider-neutral view of a DescribeInstances answer.
///
/// Field names deserialize from the EC2 wire casing (`InstanceId`,
/// `Reservations`, ...) so fixtures can be written as raw API output.
pub mod inventory {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    #[derive(Clone, Debug, Default, Deserialize)]
    #[serde(rename_all = "PascalCase", default)]
    pub struct DescribeInstancesOutput {
        pub reservations: Vec<Reservation>,
    }

    #[derive(Clone, Debug, Default, Deserialize)]
    #[serde(rename_all = "PascalCase", default)]
    pub struct Reservation {
        pub instances: Vec<Instance>,
    }

    #[derive(Clone, Debug, Default, Deserialize)]
    #[serde(rename_all = "PascalCase", default)]
    pub struct Instance {
        pub instance_id: Option<String>,
        pub instance_type: Option<String>,
        pub state: Option<InstanceState>,
        pub public_ip_address: Option<String>,
        pub private_ip_address: Option<String>,
        pub launch_time: Option<DateTime<Utc>>,
        pub tags: Vec<Tag>,
        pub placement: Option<Placement>,
        pub security_groups: Vec<GroupIdentifier>,
    }

    #[derive(Clone, Debug, Default, Deserialize)]
    #[serde(rename_all = "PascalCase", default)]
    pub struct InstanceState {
        pub name: Option<String>,
    }

    #[derive(Clone, Debug, Default, Deserialize)]
    #[serde(rename_all = "PascalCase", default)]
    pub struct Placement {
        pub availability_zone: Option<String>,
    }

    #[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
    #[serde(rename_all = "PascalCase", default)]
    pub struct Tag {
        pub key: Option<String>,
        pub value: Option<String>,
    }

    #[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
    #[serde(rename_all = "PascalCase", default)]
    pub struct GroupIdentifier {
        pub group_id: Option<String>,
        pub group_name: Option<String>,
    }
}

#[cfg(feature = "mock")]
pub mod mock;

#[cfg(feature = "aws")]
pub mod aws;
