//! Error handling for soil data query operations.
//!
//! Only load-time failures are surfaced to the user for recovery; the
//! filter and statistics engines are total functions over a successfully
//! loaded dataset for all expected inputs.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoilError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// The supplied path does not resolve to an existing file. The
    /// interactive loop recovers from this by prompting for another path.
    #[error("Data file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file exists but could not be parsed as tabular data. Fatal.
    #[error("Failed to load data from {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A non-null cell reached the statistics engine but does not parse
    /// as a number. Fatal.
    #[error("Column '{column}' holds a non-numeric value: '{value}'")]
    InvalidNumeric { column: String, value: String },
}

pub type Result<T> = std::result::Result<T, SoilError>;

impl SoilError {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a load error wrapping the underlying cause
    pub fn load_failed(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::LoadFailed {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Create an invalid numeric cell error
    pub fn invalid_numeric(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumeric {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Whether the interactive loop can recover by prompting for another path
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
