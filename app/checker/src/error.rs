//! Error types for a single address lookup

use std::error::Error as StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("{status} returned by {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        let message = error_chain(&err);
        if err.is_timeout() {
            LookupError::Timeout(message)
        } else {
            LookupError::Http(message)
        }
    }
}

/// `Display` of an error followed by each of its sources, `: ` separated.
/// reqwest keeps the actual cause (refused, DNS, timeout) in the sources.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

pub type LookupResult<T> = Result<T, LookupError>;
