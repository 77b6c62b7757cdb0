//! The core diagnostic type for the Ginco error system.
//!
//! A [`Diagnostic`] represents the single failure that stopped a parse,
//! with its kind, the offending span, the derived line/column and a
//! rendered one-line message.

use std::fmt;

use crate::{
    error::{ErrorKind, Label, formatter::Location, format_error},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// The location and the one-line rendering are computed from the source
/// text when the diagnostic is created, so the diagnostic stays meaningful
/// after the text is gone.
///
/// # Example
///
/// ```text
/// error[E102]: [2:3] ...@: trait not defined: expected a name after `@`
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind: ErrorKind,
    message: String,
    span: Span,
    location: Location,
    rendered: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic for a failure at `span` in `text`.
    ///
    /// The primary label carries the kind's description.
    pub fn new(kind: ErrorKind, text: &str, span: Span, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind,
            location: Location::locate(text, span.start()),
            rendered: format_error(text, span.start(), &message),
            message,
            span,
            labels: vec![Label::failure(text, span, kind.description())],
            help: None,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the span of the offending input.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the absolute byte offset where the failure occurred.
    pub fn offset(&self) -> usize {
        self.span.start()
    }

    /// Get the 1-based line and column of the failure.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Get the one-line rendering: `[line:column] ...<context>: <message>`.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Point at the earlier declaration in `text` this failure conflicts with.
    pub fn with_first_declaration(mut self, text: &str, span: Span) -> Self {
        self.labels.push(Label::first_declaration(text, span));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.kind, self.rendered)
    }
}

impl std::error::Error for Diagnostic {}
