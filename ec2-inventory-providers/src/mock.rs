use crate::{inventory, ComputeProvider, ProviderError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory provider for local runs and tests.
///
/// Answers every call with the same canned outcome and counts how many times
/// it was asked.
pub struct MockProvider {
    outcome: Result<Vec<inventory::Reservation>, ProviderError>,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(reservations: Vec<inventory::Reservation>) -> Self {
        Self {
            outcome: Ok(reservations),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Build from raw DescribeInstances JSON (`{"Reservations": [...]}`).
    pub fn from_describe_json(raw: &str) -> serde_json::Result<Self> {
        let output: inventory::DescribeInstancesOutput = serde_json::from_str(raw)?;
        Ok(Self::new(output.reservations))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ComputeProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn describe_instances(&self) -> Result<Vec<inventory::Reservation>, ProviderError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("🧪 [Mock Provider] describe_instances call #{}", n);
        self.outcome.clone()
    }
}
