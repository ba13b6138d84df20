//! Error types for index lookup and definition loading.

use std::path::PathBuf;

use rateref_core::RateRefError;
use thiserror::Error;

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors raised by the index crate.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Lookup, registration or validation failure from the core.
    #[error(transparent)]
    Core(#[from] RateRefError),

    /// An index definition is incomplete or inconsistent.
    #[error("Invalid definition for '{name}': {message}")]
    Definition {
        /// Name of the index or calendar being defined.
        name: String,
        /// What is wrong with it.
        message: String,
    },

    /// A definition file could not be read.
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A definition file is not valid TOML.
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl IndexError {
    /// Creates a definition error.
    #[must_use]
    pub fn definition(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Definition {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns true if the error reports an unknown name.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_not_found())
    }

    /// Returns true if the error reports a registration conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_conflict())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_are_transparent() {
        let err: IndexError = RateRefError::not_found("OvernightIndex", "XXX").into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "OvernightIndex not found: 'XXX'");
    }

    #[test]
    fn test_definition_display() {
        let err = IndexError::definition("GBP-TEST", "missing key 'currency'");
        assert_eq!(
            err.to_string(),
            "Invalid definition for 'GBP-TEST': missing key 'currency'"
        );
    }
}
