use anyhow::{Context, Result};
use rustls::crypto::ring::default_provider;
use tracing::info;
use tracing_subscriber::EnvFilter;

use balance_checker::config::Config;
use balance_checker::{input, report, EsploraClient, RunSummary, Runner};

fn install_crypto_provider() {
    // Safe to call once; ignore error if already installed
    let _ = default_provider().install_default();
}

/// Balance Checker
///
/// Reads addresses from a CSV file, looks each one up on an Esplora
/// explorer, and writes the figures to a CSV report once every lookup is
/// done. A failed lookup is recorded in the report's `error` column; an
/// unreadable input or unwritable output aborts the run.
#[tokio::main]
async fn main() -> Result<()> {
    install_crypto_provider();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Balance Checker starting...");

    let config = Config::from_env();

    let addresses = input::load_addresses(&config.input_file)?;

    let client = EsploraClient::new(config.api_url.as_str())
        .context("Failed to init Esplora client")?;
    let runner = Runner::new(client);
    let results = runner.run(&addresses).await;

    let summary = RunSummary::of(&results);
    info!(
        "Checked {} addresses: {} ok, {} failed",
        results.len(),
        summary.succeeded,
        summary.failed
    );

    report::write_report(&config.output_file, &results)?;
    info!("Done! Results saved to {}", config.output_file.display());

    Ok(())
}
