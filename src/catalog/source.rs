use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Common trait for catalog data sources.
/// This allows swapping the bundled fixture for a real backend later.
/// Sources hand back raw JSON; the store owns payload validation.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Produce the raw catalog payload, expected to be a JSON array of
    /// campsite records
    async fn fetch(&self) -> Result<Value>;

    /// Get the name of the source, for logging
    fn source_name(&self) -> &'static str;
}

static FIXTURE_JSON: &str = include_str!("../../data/campsites.json");

/// Source backed by the bundled campsite catalog, with optional simulated
/// network latency
pub struct FixtureSource {
    latency: Duration,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    /// Sleep for `latency` before returning the payload, mimicking a slow
    /// backend
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for FixtureSource {
    async fn fetch(&self) -> Result<Value> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        debug!(source = self.source_name(), "serving fixture catalog");
        Ok(serde_json::from_str(FIXTURE_JSON)?)
    }

    fn source_name(&self) -> &'static str {
        "fixture"
    }
}
