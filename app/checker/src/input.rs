//! Address list loading
//!
//! The input is a CSV file whose first column holds the address. Any other
//! columns are ignored, and a first cell reading `address` is a header.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

const HEADER: &str = "address";

/// Load the addresses listed in a CSV file, in file order.
pub fn load_addresses<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;

    let addresses = read_addresses(file)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;

    info!("Loaded {} addresses from {}", addresses.len(), path.display());
    Ok(addresses)
}

/// Parse CSV rows into trimmed addresses.
///
/// Blank rows, rows with an empty first cell and `address` header rows are
/// skipped. Duplicates are kept.
pub fn read_addresses<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut addresses = Vec::new();
    for result in rdr.records() {
        let record = result.context("Malformed CSV row")?;

        let Some(first) = record.get(0) else {
            continue;
        };

        let candidate = first.trim();
        if candidate.is_empty() || candidate.eq_ignore_ascii_case(HEADER) {
            continue;
        }

        addresses.push(candidate.to_string());
    }

    Ok(addresses)
}
