use chrono::{DateTime, FixedOffset};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IntervalError {
    #[error("Valid time '{0}' has no '/' between instant and duration")]
    MissingSeparator(String),

    #[error("Invalid start instant '{0}'")]
    InvalidStart(String, #[source] chrono::ParseError),

    // The start parsed but the duration did not, so there is no end to test against.
    #[error("Unrecognized duration '{duration}' after {start}")]
    OpenEnded {
        start: DateTime<FixedOffset>,
        duration: String,
    },

    #[error("Valid time '{0}' has a zero-length duration")]
    ZeroDuration(String),
}
