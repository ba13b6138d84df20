//! CLI error types.

use rateref_core::RateRefError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Index or calendar lookup failed.
    #[error(transparent)]
    Lookup(#[from] RateRefError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
