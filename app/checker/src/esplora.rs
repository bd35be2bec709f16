use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{LookupError, LookupResult};
use crate::protocol::{AddressInfo, AddressStats};
use crate::runner::StatsSource;

/// Upper bound on a single explorer request, connect to last body byte.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for an Esplora HTTP API (blockstream.info, mempool.space, electrs).
pub struct EsploraClient {
    client: reqwest::Client,
    base_url: String,
}

impl EsploraClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Raw `GET /address/:addr`. Non-2xx statuses and bodies that are not an
    /// address object are errors.
    pub async fn get_address_info(&self, address: &str) -> LookupResult<AddressInfo> {
        let url = format!("{}/address/{}", self.base_url, address);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status { status, url });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Stats lookup for one address. Never fails: any error is folded into
    /// an `AddressStats::Failure`. No retry.
    pub async fn address_stats(&self, address: &str) -> AddressStats {
        match self.get_address_info(address).await {
            Ok(info) => AddressStats::from_info(address, &info),
            Err(e) => {
                warn!("Lookup failed for {}: {}", address, e);
                AddressStats::failure(address, e)
            }
        }
    }
}

#[async_trait]
impl StatsSource for EsploraClient {
    async fn address_stats(&self, address: &str) -> AddressStats {
        EsploraClient::address_stats(self, address).await
    }
}
