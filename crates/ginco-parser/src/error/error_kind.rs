//! Error kinds for the Ginco diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Scanner errors
//! - `E1xx` - Parser errors

use std::fmt;

/// The closed set of failures the scanner and parser can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // =========================================================================
    // Scanner Errors (E0xx)
    // =========================================================================
    /// Expected an identifier.
    ///
    /// Identifiers start with a letter and continue with letters or digits.
    NoIdentifierFound,

    /// Expected a number.
    NoNumberFound,

    /// Expected a symbol.
    ///
    /// A symbol is a single character that is neither a letter, a digit
    /// nor a brace.
    NoSymbolFound,

    /// Expected an opening `{`.
    NoScopeFound,

    /// A scope was opened but never closed.
    UnbalancedScope,

    /// Expected a `#` comment.
    NoCommentFound,

    // =========================================================================
    // Parser Errors (E1xx)
    // =========================================================================
    /// A token with no meaning at this position.
    UnexpectedToken,

    /// A fixed keyword or punctuation did not match the token found.
    TokenMismatch,

    /// `@` was not followed by a trait name.
    TraitNotDefined,

    /// `model` was not followed by a model name.
    ModelNameNotDefined,

    /// `import` was used at file scope.
    ImportNotSupported,

    /// An enum literal repeats an earlier literal of the same enum.
    DuplicateLiteral,
}

impl ErrorKind {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Scanner errors
            ErrorKind::NoIdentifierFound => "E001",
            ErrorKind::NoNumberFound => "E002",
            ErrorKind::NoSymbolFound => "E003",
            ErrorKind::NoScopeFound => "E004",
            ErrorKind::UnbalancedScope => "E005",
            ErrorKind::NoCommentFound => "E006",
            // Parser errors
            ErrorKind::UnexpectedToken => "E100",
            ErrorKind::TokenMismatch => "E101",
            ErrorKind::TraitNotDefined => "E102",
            ErrorKind::ModelNameNotDefined => "E103",
            ErrorKind::ImportNotSupported => "E104",
            ErrorKind::DuplicateLiteral => "E105",
        }
    }

    /// Returns a short description of what this error kind means.
    pub fn description(&self) -> &'static str {
        match self {
            // Scanner errors
            ErrorKind::NoIdentifierFound => "no identifier found",
            ErrorKind::NoNumberFound => "no number found",
            ErrorKind::NoSymbolFound => "no symbol found",
            ErrorKind::NoScopeFound => "no scope found",
            ErrorKind::UnbalancedScope => "unable to find matching scope brackets",
            ErrorKind::NoCommentFound => "no comment found",
            // Parser errors
            ErrorKind::UnexpectedToken => "unexpected token",
            ErrorKind::TokenMismatch => "token mismatch",
            ErrorKind::TraitNotDefined => "trait not defined",
            ErrorKind::ModelNameNotDefined => "model name not defined",
            ErrorKind::ImportNotSupported => "import keyword not supported yet",
            ErrorKind::DuplicateLiteral => "duplicate literal found",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
