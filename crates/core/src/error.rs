// crates/core/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type of the core library.
#[derive(Debug, Error)]
pub enum SiftError {
    /// A path, selector or other argument string has the wrong shape.
    #[error("Invalid {what} '{value}': {reason}")]
    InvalidArgument {
        what: &'static str,
        value: String,
        reason: String,
    },

    /// A required field path did not resolve for one of the records.
    #[error("Field '{path}' not found in record #{position} ('{selector}')")]
    MissingField {
        selector: String,
        path: String,
        position: usize,
    },

    #[error("Cannot parse '{input}' as a date with format '{format}': {source}")]
    MalformedDate {
        input: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed to fetch '{location}': {source}")]
    Fetch {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse XML from '{location}': {source}")]
    Parse {
        location: String,
        #[source]
        source: xmltree::ParseError,
    },

    #[error("Failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },
}

pub type Result<T> = std::result::Result<T, SiftError>;

impl SiftError {
    pub(crate) fn invalid(
        what: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            what,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error was raised because a record lacked a field.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}
