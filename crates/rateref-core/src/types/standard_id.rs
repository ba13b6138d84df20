//! Scheme-qualified identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{require_name, RateRefError, RateRefResult};

/// An identifier made of a scheme and a value, written `scheme~value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StandardId {
    scheme: String,
    value: String,
}

impl StandardId {
    /// Creates an identifier.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either part is empty or the scheme contains `~`.
    pub fn of(scheme: impl Into<String>, value: impl Into<String>) -> RateRefResult<Self> {
        let scheme = scheme.into();
        let value = value.into();
        require_name("scheme", &scheme)?;
        require_name("value", &value)?;
        if scheme.contains('~') {
            return Err(RateRefError::invalid_argument(
                "scheme",
                "must not contain '~'",
            ));
        }
        Ok(Self { scheme, value })
    }

    /// The scheme.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The value within the scheme.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for StandardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.scheme, self.value)
    }
}

impl FromStr for StandardId {
    type Err = RateRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (scheme, value) = s
            .split_once('~')
            .ok_or_else(|| RateRefError::parse("standard id", s))?;
        StandardId::of(scheme, value)
    }
}

impl TryFrom<String> for StandardId {
    type Error = RateRefError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StandardId> for String {
    fn from(id: StandardId) -> Self {
        id.to_string()
    }
}
