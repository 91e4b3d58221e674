//! Error types for the I/O boundary.
//!
//! The aggregation core is total; only reading and writing tables and
//! talking to the reputation API can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing a CSV table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Missing column {column:?} in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Unsupported input format for {} (expected .txt or .csv)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl TableError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        TableError::Csv {
            path: path.into(),
            source,
        }
    }
}

/// Failure setting up or running hash lookups.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("No API key: pass --api-key or set VT_API_KEY")]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    Table(#[from] TableError),
}
