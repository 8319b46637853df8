use anyhow::Result;
use ec2_inventory_providers::ComputeProvider;
use std::sync::Arc;

use crate::config::InventoryConfig;

pub struct ProviderManager;

impl ProviderManager {
    /// Build the provider named by `config.provider`, pinned to `config.region`.
    /// Providers compiled out by feature flags are reported as unknown.
    pub async fn get_provider(config: &InventoryConfig) -> Result<Arc<dyn ComputeProvider>> {
        match config.provider.as_str() {
            #[cfg(feature = "provider-aws")]
            "aws" => {
                let provider = ec2_inventory_providers::aws::AwsProvider::new(&config.region).await;
                Ok(Arc::new(provider))
            }
            #[cfg(feature = "provider-mock")]
            "mock" => Ok(Arc::new(Self::mock_provider(config)?)),
            other => anyhow::bail!("unknown or disabled provider: {other}"),
        }
    }

    #[cfg(feature = "provider-mock")]
    fn mock_provider(config: &InventoryConfig) -> Result<ec2_inventory_providers::mock::MockProvider> {
        use anyhow::Context;
        use ec2_inventory_providers::mock::MockProvider;

        let Some(path) = config.mock_fixture_path.as_deref() else {
            return Ok(MockProvider::new(vec![]));
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading mock fixture {path}"))?;
        MockProvider::from_describe_json(&raw)
            .with_context(|| format!("parsing mock fixture {path}"))
    }
}
