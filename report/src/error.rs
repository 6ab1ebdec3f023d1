//! Errors surfaced to the user.

use thiserror::Error;

/// Reasons a report cannot be produced.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid time {input:?}, expected HH:MM:SS: {source}")]
    InvalidTime {
        input: String,
        source: chrono::ParseError,
    },

    #[error("invalid date {input:?}, expected YYYY-MM-DD: {source}")]
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },

    #[error("unknown time zone {name:?}")]
    UnknownTimezone { name: String },

    #[error("could not write report: {0}")]
    Io(#[from] std::io::Error),
}
