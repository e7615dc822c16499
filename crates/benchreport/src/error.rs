//! Error types for report generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or interpret the benchmark results.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file does not exist.
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The input file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not valid JSON or does not have the expected shape.
    #[error("malformed benchmark data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record parsed but carries values that cannot be reported.
    #[error("invalid benchmark #{index} ({name}): {reason}")]
    InvalidRecord {
        index: usize,
        name: String,
        reason: String,
    },
}

/// Failure to persist the rendered document.
#[derive(Debug, Error)]
#[error("failed to write report to {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Any error that aborts report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Result type alias for report generation.
pub type Result<T> = std::result::Result<T, ReportError>;
