//! Error types for rangekit

use std::fmt;
use thiserror::Error;

/// Result type alias for rangekit operations
pub type Result<T> = std::result::Result<T, Error>;

/// The range operation that received a value.
///
/// Every call site names itself when it builds an [`Error::InvalidArgument`],
/// so `clamp` reports `clamp` even though it shares its checks with `contains`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Range construction
    New,
    /// [`OrderedRange::contains`](crate::OrderedRange::contains)
    Contains,
    /// [`OrderedRange::clamp`](crate::OrderedRange::clamp)
    Clamp,
}

impl Operation {
    /// Name of the operation as it appears in error messages
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::New => "new",
            Operation::Contains => "contains",
            Operation::Clamp => "clamp",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for rangekit
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Value Errors
    // -------------------------------------------------------------------------
    #[error("{operation} expects a(n) {expected} as an argument, got {actual}")]
    InvalidArgument {
        operation: Operation,
        expected: String,
        actual: String,
    },

    // -------------------------------------------------------------------------
    // Parse Errors
    // -------------------------------------------------------------------------
    #[error("Failed to parse date-time '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: time::error::Parse,
    },
}

impl Error {
    /// Build an `InvalidArgument` error for `operation`
    pub(crate) fn invalid_argument(
        operation: Operation,
        expected: impl Into<String>,
        actual: impl fmt::Display,
    ) -> Self {
        Error::InvalidArgument {
            operation,
            expected: expected.into(),
            actual: actual.to_string(),
        }
    }

    /// Check if this error was caused by a value outside the range's domain
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// The operation that rejected its argument, if any
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Error::InvalidArgument { operation, .. } => Some(*operation),
            Error::Parse { .. } => None,
        }
    }
}
