//! Error types for Sieve

use std::borrow::Cow;

use thiserror::Error;

/// Error raised while constructing specifications or starting a filter.
///
/// Evaluation itself never fails: once a specification exists, deciding an
/// item is a pure boolean computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SieveError {
    /// A required constructor argument was missing or unusable.
    #[error("Invalid argument `{param}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter, e.g. `color` or `children[2]`.
        param: Cow<'static, str>,
        /// Why it was rejected.
        reason: Cow<'static, str>,
    },
}

impl SieveError {
    /// Creates an invalid-argument error.
    pub fn invalid_argument(
        param: impl Into<Cow<'static, str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        SieveError::InvalidArgument {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a missing required argument.
    pub fn missing(param: impl Into<Cow<'static, str>>) -> Self {
        Self::invalid_argument(param, "value is missing")
    }

    /// Returns the parameter name this error refers to.
    pub fn param(&self) -> &str {
        match self {
            SieveError::InvalidArgument { param, .. } => param,
        }
    }
}

/// Result type alias for Sieve operations
pub type Result<T> = std::result::Result<T, SieveError>;
