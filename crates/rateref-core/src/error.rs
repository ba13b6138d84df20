//! Error types for the rateref core.
//!
//! Every error here is a programming or data error. None of them is
//! transient, so callers should correct the input or the provider
//! configuration rather than retry.

use thiserror::Error;

/// A specialized Result type for rateref core operations.
pub type RateRefResult<T> = Result<T, RateRefError>;

/// The main error type for rateref core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateRefError {
    /// A name or key was not known.
    #[error("{kind} not found: '{name}'")]
    NotFound {
        /// What was being looked up ("OvernightIndex", "property", ...).
        kind: String,
        /// The name or key that was not found.
        name: String,
    },

    /// A name was registered twice with different values, or the
    /// registry could not accept a registration.
    #[error("{kind} conflict for '{name}': {reason}")]
    Conflict {
        /// The registry or catalog that detected the conflict.
        kind: String,
        /// The conflicting name.
        name: String,
        /// Description of the conflict.
        reason: String,
    },

    /// A single value was requested for a key holding several values.
    #[error("Ambiguous value for '{key}': {count} values present")]
    AmbiguousValue {
        /// The multi-valued key.
        key: String,
        /// Number of values held by the key.
        count: usize,
    },

    /// An argument was absent or empty.
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A textual value could not be parsed into a domain type.
    #[error("Cannot parse {kind} from '{input}'")]
    Parse {
        /// The target type ("tenor", "currency", ...).
        kind: String,
        /// The rejected input.
        input: String,
    },
}

impl RateRefError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict(
        kind: impl Into<String>,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Conflict {
            kind: kind.into(),
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates an ambiguous value error.
    #[must_use]
    pub fn ambiguous_value(key: impl Into<String>, count: usize) -> Self {
        Self::AmbiguousValue {
            key: key.into(),
            count,
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(kind: impl Into<String>, input: impl Into<String>) -> Self {
        Self::Parse {
            kind: kind.into(),
            input: input.into(),
        }
    }

    /// Returns true if this error reports an unknown name or key.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this error reports a registration conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

/// Rejects empty or whitespace-only names.
pub(crate) fn require_name(argument: &str, value: &str) -> RateRefResult<()> {
    if value.trim().is_empty() {
        return Err(RateRefError::invalid_argument(argument, "must not be empty"));
    }
    Ok(())
}
