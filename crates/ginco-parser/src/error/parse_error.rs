//! The ParseError type returned by [`crate::parse`].

use thiserror::Error;

use crate::error::{Diagnostic, ErrorKind};

/// A type alias for `Result<T, Diagnostic>`.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Error type for a failed parse.
///
/// Parsing stops at the first malformed construct, so the error wraps
/// exactly one diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{diagnostic}")]
pub struct ParseError {
    diagnostic: Box<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from a diagnostic.
    pub fn new(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostic: Box::new(diagnostic),
        }
    }

    /// Get the diagnostic describing the failure.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// Get the kind of the failure.
    pub fn kind(&self) -> ErrorKind {
        self.diagnostic.kind()
    }

    /// Get the absolute byte offset of the failure.
    pub fn offset(&self) -> usize {
        self.diagnostic.offset()
    }
}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(diagnostic)
    }
}
