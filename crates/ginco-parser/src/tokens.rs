//! Token types produced by the scanner.

use std::fmt;

use crate::span::Span;

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `# ...` up to the end of the line
    Comment,
    /// `{ ... }` with nested braces preserved
    Scope,
    /// A run of digits
    Number,
    /// A letter followed by letters or digits
    Identifier,
    /// A single character that is not a letter, digit or brace
    Symbol,
    /// A single character that is not a brace
    Rune,
    /// No input left
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Comment => "comment",
            TokenKind::Scope => "scope",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Symbol => "symbol",
            TokenKind::Rune => "rune",
            TokenKind::Eof => "end of input",
        };
        write!(f, "{name}")
    }
}

/// A token with its value and position.
///
/// `value` borrows from the source. The span covers the value only: for a
/// comment it excludes the leading `#`, for a scope it excludes the outer
/// braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    kind: TokenKind,
    value: &'src str,
    span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, value: &'src str, span: Span) -> Self {
        Self { kind, value, span }
    }

    /// Create the end-of-input token at `offset`.
    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", Span::at(offset))
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &'src str {
        self.value
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns `true` if this token has the given kind and value.
    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Scope => write!(f, "`{{`"),
            TokenKind::Comment => write!(f, "comment"),
            _ => write!(f, "`{}`", self.value),
        }
    }
}
