//! Source spans attached to a diagnostic.

use crate::{error::formatter::Location, span::Span};

/// Message of the label pointing at the first of two equal declarations.
pub const FIRST_DECLARED: &str = "first declared here";

/// What a label points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    /// The token parsing stopped at. Every diagnostic has exactly one.
    Failure,
    /// An earlier declaration the failure conflicts with, such as the first
    /// occurrence of a repeated enum literal.
    FirstDeclaration,
}

/// A message pinned to a span, with the span's line and column resolved
/// against the text it was found in.
///
/// ```text
/// [1:25] duplicate literal found           <- LabelRole::Failure
/// [1:21] first declared here               <- LabelRole::FirstDeclaration
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    role: LabelRole,
    span: Span,
    location: Location,
    message: String,
}

impl Label {
    pub(crate) fn new(role: LabelRole, text: &str, span: Span, message: impl Into<String>) -> Self {
        Self {
            role,
            span,
            location: Location::locate(text, span.start()),
            message: message.into(),
        }
    }

    /// Label the token a parse failed at.
    pub fn failure(text: &str, span: Span, message: impl Into<String>) -> Self {
        Self::new(LabelRole::Failure, text, span, message)
    }

    /// Label the first of two conflicting declarations.
    pub fn first_declaration(text: &str, span: Span) -> Self {
        Self::new(LabelRole::FirstDeclaration, text, span, FIRST_DECLARED)
    }

    pub fn role(&self) -> LabelRole {
        self.role
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Line and column of the span start.
    pub fn location(&self) -> Location {
        self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renderers highlight the failure and dim everything else.
    pub fn is_primary(&self) -> bool {
        self.role == LabelRole::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "enum Kind {\n  literals { a b a }\n}";

    #[test]
    fn test_failure_label() {
        let label = Label::failure(SOURCE, Span::new(29..30), "duplicate literal found");

        assert_eq!(label.role(), LabelRole::Failure);
        assert!(label.is_primary());
        assert_eq!(label.message(), "duplicate literal found");
        assert_eq!(label.span().start(), 29);
        assert_eq!((label.location().line(), label.location().column()), (2, 18));
    }

    #[test]
    fn test_first_declaration_label() {
        let label = Label::first_declaration(SOURCE, Span::new(25..26));

        assert_eq!(label.role(), LabelRole::FirstDeclaration);
        assert!(!label.is_primary());
        assert_eq!(label.message(), FIRST_DECLARED);
        assert_eq!((label.location().line(), label.location().column()), (2, 14));
    }
}
