use std::env;
use std::time::Duration;

use anyhow::Context;
use catalog::client::DEFAULT_TIMEOUT;

/// Configuration for the product catalog collaborator.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub address: String,
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Environment variables:
    /// - PRODUCT_CATALOG_ADDR: catalog service address (required)
    /// - PRODUCT_CATALOG_TIMEOUT_SECS: request timeout in seconds (default: 5)
    pub fn from_env() -> anyhow::Result<Self> {
        let address = env::var("PRODUCT_CATALOG_ADDR")
            .context("PRODUCT_CATALOG_ADDR environment variable must be set")?;
        let timeout = parse_timeout(env::var("PRODUCT_CATALOG_TIMEOUT_SECS").ok().as_deref());

        Ok(Self { address, timeout })
    }
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT)
}
