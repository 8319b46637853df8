use anyhow::Context;
use axum::{extract::State, http::Method};
use ec2_inventory_common::{InstanceListBody, InstanceRecord, InstanceTag, SecurityGroupRef};
use ec2_inventory_providers::{inventory, ComputeProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::app::state::AppState;
use crate::error::HandlerError;
use crate::response::OutboundResponse;

// --- DTOs ---

/// HTTP-shaped event. Only `httpMethod` is read; headers and body are
/// accepted in any JSON shape and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRequest {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub headers: Option<serde_json::Value>,
    #[serde(default)]
    pub body: Option<serde_json::Value>,
}

impl InboundRequest {
    pub fn with_method(method: &str) -> Self {
        Self {
            http_method: Some(method.to_string()),
            ..Self::default()
        }
    }

    pub fn is_preflight(&self) -> bool {
        self.http_method.as_deref() == Some("OPTIONS")
    }
}

// --- Handler ---

pub struct RequestHandler {
    provider: Arc<dyn ComputeProvider>,
}

impl RequestHandler {
    pub fn new(provider: Arc<dyn ComputeProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// OPTIONS answers the preflight without touching the provider; every
    /// other method (or none) lists instances.
    pub async fn handle(&self, event: &InboundRequest) -> OutboundResponse {
        if event.is_preflight() {
            tracing::debug!("CORS preflight");
            return OutboundResponse::preflight();
        }

        match self.list_instances(event).await {
            Ok(body) => OutboundResponse::ok(body),
            Err(err) => err.into_response(),
        }
    }

    /// Entry point for raw JSON events. An event that does not fit
    /// [`InboundRequest`] is an internal error, not a provider one.
    pub async fn handle_value(&self, event: serde_json::Value) -> OutboundResponse {
        match serde_json::from_value::<InboundRequest>(event).context("malformed event") {
            Ok(event) => self.handle(&event).await,
            Err(err) => HandlerError::from(err).into_response(),
        }
    }

    async fn list_instances(&self, event: &InboundRequest) -> Result<String, HandlerError> {
        let reservations = self.provider.describe_instances().await?;
        let body = InstanceListBody::new(project_instances(&reservations));

        tracing::info!(
            method = event.http_method.as_deref().unwrap_or("-"),
            provider = self.provider.name(),
            reservations = reservations.len(),
            count = body.count,
            "listed instances"
        );

        let json = serde_json::to_string(&body).context("failed to serialize instance list")?;
        Ok(json)
    }
}

// --- Projection ---

/// Flatten reservations into records, keeping reservation order and then
/// in-reservation order.
pub fn project_instances(reservations: &[inventory::Reservation]) -> Vec<InstanceRecord> {
    reservations
        .iter()
        .flat_map(|r| r.instances.iter())
        .map(project_instance)
        .collect()
}

fn project_instance(instance: &inventory::Instance) -> InstanceRecord {
    InstanceRecord {
        instance_id: instance.instance_id.clone(),
        instance_type: instance.instance_type.clone(),
        state: instance.state.as_ref().and_then(|s| s.name.clone()),
        public_ip_address: instance.public_ip_address.clone(),
        private_ip_address: instance.private_ip_address.clone(),
        launch_time: instance.launch_time.map(|t| t.to_rfc3339()),
        tags: instance
            .tags
            .iter()
            .map(|t| InstanceTag {
                key: t.key.clone(),
                value: t.value.clone(),
            })
            .collect(),
        availability_zone: instance
            .placement
            .as_ref()
            .and_then(|p| p.availability_zone.clone()),
        security_groups: instance
            .security_groups
            .iter()
            .map(|g| SecurityGroupRef {
                group_id: g.group_id.clone(),
                group_name: g.group_name.clone(),
            })
            .collect(),
    }
}

// --- HTTP ---

#[utoipa::path(
    get,
    path = "/instances",
    tag = "Instances",
    responses(
        (status = 200, description = "Instances in the configured region", body = InstanceListBody),
        (status = 500, description = "Provider or internal failure", body = ec2_inventory_common::ErrorBody)
    )
)]
pub async fn list_instances(State(state): State<Arc<AppState>>, method: Method) -> OutboundResponse {
    let event = InboundRequest::with_method(method.as_str());
    state.handler.handle(&event).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ec2_inventory_providers::inventory::{
        GroupIdentifier, Instance, InstanceState, Placement, Reservation, Tag,
    };

    fn instance(id: &str) -> Instance {
        Instance {
            instance_id: Some(id.to_string()),
            ..Instance::default()
        }
    }

    #[test]
    fn preflight_detection_is_exact() {
        assert!(InboundRequest::with_method("OPTIONS").is_preflight());
        assert!(!InboundRequest::with_method("options").is_preflight());
        assert!(!InboundRequest::with_method("GET").is_preflight());
        assert!(!InboundRequest::default().is_preflight());
    }

    #[test]
    fn inbound_request_ignores_body_shape() {
        let event: InboundRequest = serde_json::from_value(serde_json::json!({
            "httpMethod": "POST",
            "body": {"nested": [1, 2]},
            "headers": null,
            "requestContext": {"stage": "prod"}
        }))
        .unwrap();
        assert_eq!(event.http_method.as_deref(), Some("POST"));
    }

    #[test]
    fn projection_flattens_in_provider_order() {
        let reservations = vec![
            Reservation { instances: vec![instance("i-3"), instance("i-1")] },
            Reservation { instances: vec![] },
            Reservation { instances: vec![instance("i-2")] },
        ];
        let ids: Vec<_> = project_instances(&reservations)
            .into_iter()
            .map(|r| r.instance_id.unwrap())
            .collect();
        assert_eq!(ids, vec!["i-3", "i-1", "i-2"]);
    }

    #[test]
    fn projection_maps_every_field() {
        let full = Instance {
            instance_id: Some("i-9".into()),
            instance_type: Some("m5.large".into()),
            state: Some(InstanceState { name: Some("stopped".into()) }),
            public_ip_address: Some("3.3.3.3".into()),
            private_ip_address: Some("10.1.2.3".into()),
            launch_time: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()),
            tags: vec![
                Tag { key: Some("b".into()), value: Some("2".into()) },
                Tag { key: Some("a".into()), value: Some("1".into()) },
            ],
            placement: Some(Placement { availability_zone: Some("eu-west-1b".into()) }),
            security_groups: vec![
                GroupIdentifier { group_id: Some("sg-2".into()), group_name: Some("web".into()) },
                GroupIdentifier { group_id: Some("sg-1".into()), group_name: None },
            ],
        };

        let record = &project_instances(&[Reservation { instances: vec![full] }])[0];
        assert_eq!(record.instance_type.as_deref(), Some("m5.large"));
        assert_eq!(record.state.as_deref(), Some("stopped"));
        assert_eq!(record.launch_time.as_deref(), Some("2024-03-01T12:30:00+00:00"));
        assert_eq!(record.availability_zone.as_deref(), Some("eu-west-1b"));
        assert_eq!(
            record.tags.iter().map(|t| t.key.as_deref()).collect::<Vec<_>>(),
            vec![Some("b"), Some("a")]
        );
        assert_eq!(record.security_groups.len(), 2);
        assert_eq!(record.security_groups[0].group_name.as_deref(), Some("web"));
        assert_eq!(record.security_groups[1].group_name, None);
    }

    #[test]
    fn state_without_name_is_null() {
        let inst = Instance {
            state: Some(InstanceState { name: None }),
            ..instance("i-1")
        };
        assert_eq!(project_instance(&inst).state, None);
    }
}
