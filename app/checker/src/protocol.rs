use bitcoin::{Amount, SignedAmount};
use serde::Deserialize;

/// Body of Esplora's `GET /address/:addr`. Only the stats objects are read.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AddressInfo {
    #[serde(default)]
    pub chain_stats: Option<ChainStats>,
    #[serde(default)]
    pub mempool_stats: Option<ChainStats>,
}

/// Stats object shared by `chain_stats` and `mempool_stats`. Amounts are in sats.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChainStats {
    pub tx_count: u64,
    pub funded_txo_sum: u64,
    pub spent_txo_sum: u64,
}

/// One row of the report: either the figures for an address or the reason
/// they could not be fetched.
#[derive(Debug, Clone, PartialEq)]
pub enum AddressStats {
    Success {
        address: String,
        tx_count: u64,
        total_received: f64,
        total_sent: f64,
        balance: f64,
    },
    Failure {
        address: String,
        error: String,
    },
}

impl AddressStats {
    /// Normalize an explorer response.
    ///
    /// `tx_count`, `total_received` and `total_sent` include mempool activity,
    /// `balance` is confirmed funds only.
    pub fn from_info(address: impl Into<String>, info: &AddressInfo) -> Self {
        let chain = info.chain_stats.unwrap_or_default();
        let mempool = info.mempool_stats.unwrap_or_default();

        let received = chain.funded_txo_sum.saturating_add(mempool.funded_txo_sum);
        let sent = chain.spent_txo_sum.saturating_add(mempool.spent_txo_sum);
        let balance = sats_to_i64(chain.funded_txo_sum).saturating_sub(sats_to_i64(chain.spent_txo_sum));

        Self::Success {
            address: address.into(),
            tx_count: chain.tx_count.saturating_add(mempool.tx_count),
            total_received: Amount::from_sat(received).to_btc(),
            total_sent: Amount::from_sat(sent).to_btc(),
            balance: SignedAmount::from_sat(balance).to_btc(),
        }
    }

    pub fn failure(address: impl Into<String>, error: impl ToString) -> Self {
        Self::Failure {
            address: address.into(),
            error: error.to_string(),
        }
    }

    pub fn address(&self) -> &str {
        match self {
            Self::Success { address, .. } | Self::Failure { address, .. } => address,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

fn sats_to_i64(sats: u64) -> i64 {
    i64::try_from(sats).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(tx_count: u64, funded: u64, spent: u64) -> ChainStats {
        ChainStats {
            tx_count,
            funded_txo_sum: funded,
            spent_txo_sum: spent,
        }
    }

    #[test]
    fn balance_excludes_mempool_but_totals_include_it() {
        let info = AddressInfo {
            chain_stats: Some(stats(2, 500_000_000, 100_000_000)),
            mempool_stats: Some(stats(1, 50_000_000, 0)),
        };

        assert_eq!(
            AddressStats::from_info("bc1qtest", &info),
            AddressStats::Success {
                address: "bc1qtest".to_string(),
                tx_count: 3,
                total_received: 5.5,
                total_sent: 1.0,
                balance: 4.0,
            }
        );
    }

    #[test]
    fn mempool_spend_does_not_reduce_balance() {
        let info = AddressInfo {
            chain_stats: Some(stats(1, 100_000, 0)),
            mempool_stats: Some(stats(1, 0, 100_000)),
        };

        match AddressStats::from_info("a", &info) {
            AddressStats::Success { total_sent, balance, .. } => {
                assert_eq!(total_sent, 0.001);
                assert_eq!(balance, 0.001);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let info: AddressInfo =
            serde_json::from_str(r#"{"address":"x","chain_stats":{"tx_count":4}}"#).unwrap();

        assert_eq!(info.chain_stats, Some(stats(4, 0, 0)));
        assert_eq!(info.mempool_stats, None);

        match AddressStats::from_info("x", &info) {
            AddressStats::Success {
                tx_count,
                total_received,
                total_sent,
                balance,
                ..
            } => {
                assert_eq!(tx_count, 4);
                assert_eq!(total_received, 0.0);
                assert_eq!(total_sent, 0.0);
                assert_eq!(balance, 0.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn empty_object_is_all_zero() {
        let info: AddressInfo = serde_json::from_str("{}").unwrap();
        let record = AddressStats::from_info("x", &info);
        assert!(record.is_success());
        assert_eq!(record.address(), "x");
    }

    #[test]
    fn failure_keeps_address_and_message() {
        let record = AddressStats::failure("addr", "timed out");
        assert!(!record.is_success());
        assert_eq!(
            record,
            AddressStats::Failure {
                address: "addr".to_string(),
                error: "timed out".to_string(),
            }
        );
    }
}
