use crate::{inventory, ComputeProvider, ProviderError};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ec2::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ec2::operation::describe_instances::DescribeInstancesError;
use aws_sdk_ec2::primitives::DateTime as AwsDateTime;
use aws_sdk_ec2::types;
use aws_sdk_ec2::Client;
use chrono::{DateTime, Utc};

const DESCRIBE_INSTANCES: &str = "DescribeInstances";

pub struct AwsProvider {
    sdk_config: SdkConfig,
}

impl AwsProvider {
    /// Load credentials from the ambient AWS environment, pinned to `region`.
    pub async fn new(region: &str) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_ec2::config::Region::new(region.to_string()))
            .load()
            .await;
        Self::from_sdk_config(sdk_config)
    }

    pub fn from_sdk_config(sdk_config: SdkConfig) -> Self {
        Self { sdk_config }
    }

    pub fn region(&self) -> Option<&str> {
        self.sdk_config.region().map(|r| r.as_ref())
    }
}

#[async_trait]
impl ComputeProvider for AwsProvider {
    fn name(&self) -> &'static str {
        "aws"
    }

    async fn describe_instances(&self) -> Result<Vec<inventory::Reservation>, ProviderError> {
        // Client is per call; the loaded config (credentials cache) is shared.
        let client = Client::new(&self.sdk_config);
        tracing::debug!(
            "🔵 [EC2 API] {} region={}",
            DESCRIBE_INSTANCES,
            self.region().unwrap_or("-")
        );

        let output = client
            .describe_instances()
            .send()
            .await
            .map_err(provider_error)?;

        if output.next_token().is_some() {
            tracing::debug!("ℹ️ [EC2 API] {} returned a next_token; not following it", DESCRIBE_INSTANCES);
        }

        output.reservations().iter().map(convert_reservation).collect()
    }
}

fn provider_error(err: SdkError<DescribeInstancesError>) -> ProviderError {
    match err.code() {
        Some(code) => ProviderError::Api {
            operation: DESCRIBE_INSTANCES,
            code: code.to_string(),
            message: err.message().unwrap_or_default().to_string(),
        },
        None => ProviderError::Transport(DisplayErrorContext(&err).to_string()),
    }
}

fn convert_reservation(reservation: &types::Reservation) -> Result<inventory::Reservation, ProviderError> {
    let instances = reservation
        .instances()
        .iter()
        .map(convert_instance)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(inventory::Reservation { instances })
}

fn convert_instance(instance: &types::Instance) -> Result<inventory::Instance, ProviderError> {
    let launch_time = instance.launch_time().map(to_utc).transpose()?;

    Ok(inventory::Instance {
        instance_id: instance.instance_id().map(str::to_string),
        instance_type: instance.instance_type().map(|t| t.as_str().to_string()),
        state: instance.state().map(|s| inventory::InstanceState {
            name: s.name().map(|n| n.as_str().to_string()),
        }),
        public_ip_address: instance.public_ip_address().map(str::to_string),
        private_ip_address: instance.private_ip_address().map(str::to_string),
        launch_time,
        tags: instance
            .tags()
            .iter()
            .map(|t| inventory::Tag {
                key: t.key().map(str::to_string),
                value: t.value().map(str::to_string),
            })
            .collect(),
        placement: instance.placement().map(|p| inventory::Placement {
            availability_zone: p.availability_zone().map(str::to_string),
        }),
        security_groups: instance
            .security_groups()
            .iter()
            .map(|g| inventory::GroupIdentifier {
                group_id: g.group_id().map(str::to_string),
                group_name: g.group_name().map(str::to_string),
            })
            .collect(),
    })
}

fn to_utc(t: &AwsDateTime) -> Result<DateTime<Utc>, ProviderError> {
    DateTime::<Utc>::from_timestamp(t.secs(), t.subsec_nanos()).ok_or_else(|| {
        ProviderError::InvalidResponse(format!("launch time out of range: {:?}", t))
    })
}
