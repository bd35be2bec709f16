//! Balance Checker Library
//!
//! Looks up on-chain statistics for a list of Bitcoin addresses through an
//! Esplora block explorer and writes them to a CSV report.

pub mod config;
pub mod error;
pub mod esplora;
pub mod input;
pub mod protocol;
pub mod report;
pub mod runner;

pub use esplora::EsploraClient;
pub use protocol::AddressStats;
pub use runner::{RunSummary, Runner, StatsSource};
