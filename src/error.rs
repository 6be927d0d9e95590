//! Error types shared across the library

use thiserror::Error;

/// Errors produced by table loading and the analysis/projection engines
#[derive(Debug, Error)]
pub enum Error {
    /// The caller passed an argument the computation cannot work with:
    /// a zero projection horizon, an unknown column, or a non-numeric
    /// cell where a number is required
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O failure while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
