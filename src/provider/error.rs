use crate::types::coordinate::Coordinate;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode JSON response from {0}")]
    JsonDecode(String, #[source] reqwest::Error),

    #[error("Response from {url} is missing '{field}'")]
    MissingField { url: String, field: &'static str },
}

/// Why a single grid point produced no sample. Never fatal for a run.
#[derive(Debug, Error)]
pub enum PointError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Fetching wind for {coordinate} timed out after {after:?}")]
    TimedOut {
        coordinate: Coordinate,
        after: Duration,
    },
}
