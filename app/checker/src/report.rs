//! CSV report output

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::protocol::AddressStats;

pub const COLUMNS: [&str; 6] = [
    "address",
    "tx_count",
    "total_received",
    "total_sent",
    "balance",
    "error",
];

/// Flat view of a record; `None` renders as an empty cell.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    address: &'a str,
    tx_count: Option<u64>,
    total_received: Option<String>,
    total_sent: Option<String>,
    balance: Option<String>,
    error: Option<&'a str>,
}

impl<'a> From<&'a AddressStats> for ReportRow<'a> {
    fn from(stats: &'a AddressStats) -> Self {
        match stats {
            AddressStats::Success {
                address,
                tx_count,
                total_received,
                total_sent,
                balance,
            } => Self {
                address,
                tx_count: Some(*tx_count),
                total_received: Some(format_btc(*total_received)),
                total_sent: Some(format_btc(*total_sent)),
                balance: Some(format_btc(*balance)),
                error: None,
            },
            AddressStats::Failure { address, error } => Self {
                address,
                tx_count: None,
                total_received: None,
                total_sent: None,
                balance: None,
                error: Some(error.as_str()),
            },
        }
    }
}

/// Write the report to `path`, replacing any existing file.
pub fn write_report<P: AsRef<Path>>(path: P, records: &[AddressStats]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    write_records(file, records)
        .with_context(|| format!("Failed to write output file {}", path.display()))
}

/// Header plus one row per record, in order, CRLF terminated. The header is
/// written even when there are no records.
pub fn write_records<W: Write>(writer: W, records: &[AddressStats]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(COLUMNS)?;
    for record in records {
        wtr.serialize(ReportRow::from(record))?;
    }
    wtr.flush()?;

    Ok(())
}

/// Shortest decimal that round-trips, keeping a `.0` on whole numbers.
fn format_btc(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
