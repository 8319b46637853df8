// Runtime configuration, resolved once at startup and passed down explicitly.

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_PROVIDER: &str = "aws";
pub const DEFAULT_API_ADDR: &str = "0.0.0.0:8003";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostingMode {
    /// Invoked through the AWS Lambda runtime API.
    Lambda,
    /// Local axum server, for development.
    Server,
}

impl HostingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostingMode::Lambda => "lambda",
            HostingMode::Server => "server",
        }
    }
}

#[derive(Clone, Debug)]
pub struct InventoryConfig {
    /// Region the compute provider is pinned to (`AWS_REGION`).
    pub region: String,
    /// Provider code (`PROVIDER`): "aws" or "mock".
    pub provider: String,
    /// Bind address for server mode (`API_ADDR`).
    pub api_addr: String,
    /// DescribeInstances JSON served by the mock provider (`MOCK_DESCRIBE_INSTANCES_FILE`).
    pub mock_fixture_path: Option<String>,
    pub hosting: HostingMode,
}

impl InventoryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`InventoryConfig::from_env`] but reading through `lookup`.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let hosting = if get("AWS_LAMBDA_RUNTIME_API").is_some() {
            HostingMode::Lambda
        } else {
            HostingMode::Server
        };

        Self {
            region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            provider: get("PROVIDER")
                .map(|p| p.to_lowercase())
                .unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
            api_addr: get("API_ADDR").unwrap_or_else(|| DEFAULT_API_ADDR.to_string()),
            mock_fixture_path: get("MOCK_DESCRIBE_INSTANCES_FILE"),
            hosting,
        }
    }
}
