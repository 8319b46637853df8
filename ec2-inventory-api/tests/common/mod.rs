// Common test utilities and fixtures
use axum::Router;
use axum_test::TestServer;
use ec2_inventory_api::routes::create_router;
use ec2_inventory_api::{AppState, RequestHandler};
use ec2_inventory_providers::mock::MockProvider;
use ec2_inventory_providers::ProviderError;
use std::sync::Arc;

/// Two reservations, three instances, in EC2 wire format.
pub const TWO_RESERVATIONS: &str = r#"{
    "Reservations": [
        {
            "ReservationId": "r-1",
            "Instances": [
                {
                    "InstanceId": "i-web-1",
                    "InstanceType": "t3.small",
                    "State": {"Code": 16, "Name": "running"},
                    "PublicIpAddress": "54.10.0.1",
                    "PrivateIpAddress": "10.0.0.1",
                    "LaunchTime": "2024-03-01T12:30:00Z",
                    "Placement": {"AvailabilityZone": "us-east-1a"},
                    "Tags": [{"Key": "Name", "Value": "web-1"}, {"Key": "env", "Value": "prod"}],
                    "SecurityGroups": [
                        {"GroupId": "sg-web", "GroupName": "web"},
                        {"GroupId": "sg-ssh", "GroupName": "ssh"}
                    ]
                },
                {
                    "InstanceId": "i-web-2",
                    "InstanceType": "t3.small",
                    "State": {"Code": 80, "Name": "stopped"}
                }
            ]
        },
        {
            "ReservationId": "r-2",
            "Instances": [
                {"InstanceId": "i-batch-1", "InstanceType": "c5.xlarge", "State": {"Name": "pending"}}
            ]
        }
    ]
}"#;

pub fn fixture_provider(raw: &str) -> Arc<MockProvider> {
    Arc::new(MockProvider::from_describe_json(raw).expect("valid fixture"))
}

pub fn auth_failure_provider() -> Arc<MockProvider> {
    Arc::new(MockProvider::failing(ProviderError::Api {
        operation: "DescribeInstances",
        code: "AuthFailure".to_string(),
        message: "AWS was not able to validate the provided access credentials".to_string(),
    }))
}

pub fn create_handler(provider: Arc<MockProvider>) -> RequestHandler {
    RequestHandler::new(provider)
}

/// Router with state, as served by main.rs
pub fn create_test_app(provider: Arc<MockProvider>) -> Router {
    let handler = Arc::new(create_handler(provider));
    create_router().with_state(AppState::new(handler))
}

pub fn create_test_server(provider: Arc<MockProvider>) -> TestServer {
    TestServer::new(create_test_app(provider)).expect("test server")
}
