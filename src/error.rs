//! Error types for the loading, preparation and fitting pipeline.
//!
//! Library functions return [`Result`], whose error is [`AppError`]. The
//! binary wraps these in `anyhow` at startup, where every failure is fatal.
//!
//! ```
//! use gdp_consumption::error::AppError;
//!
//! let err = AppError::MissingColumn {
//!     path: "gdp_data.csv".to_owned(),
//!     column: "TIME".to_owned(),
//! };
//! assert_eq!(err.to_string(), "Missing column 'TIME' in gdp_data.csv");
//! ```

use std::fmt;

/// Main error type for pipeline operations.
#[derive(Debug)]
pub enum AppError {
    /// The source file could not be opened or read.
    Io(std::io::Error),

    /// A required column is absent from a source file.
    MissingColumn { path: String, column: String },

    /// Polars failed while parsing, casting, joining or aggregating.
    DataProcessing(String),

    /// The regression could not be solved.
    Fit(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MissingColumn { path, column } => {
                write!(f, "Missing column '{column}' in {path}")
            }
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Fit(msg) => write!(f, "Regression failed: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<polars::error::PolarsError> for AppError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

impl From<linfa_linear::LinearError<f64>> for AppError {
    fn from(err: linfa_linear::LinearError<f64>) -> Self {
        Self::Fit(err.to_string())
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, AppError>;
