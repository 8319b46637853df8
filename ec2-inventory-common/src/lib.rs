use serde::{Deserialize, Serialize};

// --- Error categories ---

/// Category reported when the compute provider call itself fails.
pub const PROVIDER_ERROR_CATEGORY: &str = "Failed to fetch EC2 instances";
/// Category reported for every other failure on the list path.
pub const INTERNAL_ERROR_CATEGORY: &str = "Internal server error";

// --- CORS ---

/// Headers attached to every response, success or failure.
pub const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "GET, OPTIONS"),
];

// --- Wire types ---

/// A tag as the provider reports it. Keys keep the provider's casing
/// (`Key` / `Value`) because tags are passed through verbatim.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct InstanceTag {
    #[serde(rename = "Key", skip_serializing_if = "Option::is_none", default)]
    pub key: Option<String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none", default)]
    pub value: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroupRef {
    pub group_id: Option<String>,
    pub group_name: Option<String>,
}

/// Flat projection of one provider instance.
///
/// Every field that can be missing upstream is an `Option` serialized as
/// `null`, so the shape of a record never depends on what the provider
/// filled in.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstanceRecord {
    pub instance_id: Option<String>,
    pub instance_type: Option<String>,
    pub state: Option<String>,
    pub public_ip_address: Option<String>,
    pub private_ip_address: Option<String>,
    /// ISO-8601, e.g. `2024-03-01T12:30:00+00:00`.
    pub launch_time: Option<String>,
    pub tags: Vec<InstanceTag>,
    pub availability_zone: Option<String>,
    pub security_groups: Vec<SecurityGroupRef>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct InstanceListBody {
    pub instances: Vec<InstanceRecord>,
    pub count: usize,
}

impl InstanceListBody {
    pub fn new(instances: Vec<InstanceRecord>) -> Self {
        let count = instances.len();
        Self { instances, count }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}
