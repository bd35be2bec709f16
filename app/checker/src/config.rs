//! Configuration management
//!
//! Input/output file names and the explorer base URL. Each can be
//! overridden through an environment variable.

use std::env;
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_INPUT_FILE: &str = "addresses_with_balance_note.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "btc_balances_results.csv";
pub const DEFAULT_API_URL: &str = "https://blockstream.info/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let config = Self {
            input_file: get_input_file(),
            output_file: get_output_file(),
            api_url: get_api_url(),
        };

        info!(
            "Config: input={} output={} api={}",
            config.input_file.display(),
            config.output_file.display(),
            config.api_url
        );

        config
    }
}

/// Get the CSV file holding the addresses to check
///
/// Reads BALANCE_INPUT_FILE, falling back to the default file name in the
/// working directory.
pub fn get_input_file() -> PathBuf {
    env::var("BALANCE_INPUT_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_INPUT_FILE))
}

/// Get the CSV file the report is written to
pub fn get_output_file() -> PathBuf {
    env::var("BALANCE_OUTPUT_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_FILE))
}

/// Get the Esplora API base URL
pub fn get_api_url() -> String {
    env::var("ESPLORA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
