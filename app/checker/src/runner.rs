use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::protocol::AddressStats;

/// Pause after every lookup, to stay under the explorer's rate limit.
pub const INTER_CALL_DELAY: Duration = Duration::from_millis(500);

/// Anything that can turn an address into a report row.
///
/// Implementations must not fail: errors belong in `AddressStats::Failure`.
#[async_trait]
pub trait StatsSource {
    async fn address_stats(&self, address: &str) -> AddressStats;
}

/// Drives a `StatsSource` over an address list, one lookup at a time.
pub struct Runner<S> {
    source: S,
}

impl<S: StatsSource + Sync> Runner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// One record per address, in input order. Duplicates are looked up again.
    pub async fn run(&self, addresses: &[String]) -> Vec<AddressStats> {
        let total = addresses.len();
        let mut results = Vec::with_capacity(total);

        for (i, address) in addresses.iter().enumerate() {
            info!("[{}/{}] Checking {} ...", i + 1, total, address);
            results.push(self.source.address_stats(address).await);
            sleep(INTER_CALL_DELAY).await;
        }

        results
    }
}

/// Outcome counts for the final log line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn of(records: &[AddressStats]) -> Self {
        let succeeded = records.iter().filter(|r| r.is_success()).count();
        Self {
            succeeded,
            failed: records.len() - succeeded,
        }
    }
}
