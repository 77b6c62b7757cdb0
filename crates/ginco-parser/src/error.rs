//! Error and diagnostic system for the Ginco parser.
//!
//! Parsing stops at the first malformed construct, so a failure is always a
//! single [`Diagnostic`]:
//! - An [`ErrorKind`] with a stable code for documentation and searchability
//! - The offset (and derived line/column) where the failure occurred
//! - Labeled spans and optional help text for rich rendering
//! - A one-line rendering produced by [`format_error`]
//!
//! [`ParseError`] wraps the diagnostic for callers of [`crate::parse`].
//!
//! # Example
//!
//! ```
//! # use ginco_parser::error::{Diagnostic, ErrorKind};
//! # use ginco_parser::Span;
//! let source = "enum E { literals { a b a } }";
//!
//! let diag = Diagnostic::new(ErrorKind::DuplicateLiteral, source, Span::new(24..25), "duplicate literal found")
//!     .with_first_declaration(source, Span::new(20..21))
//!     .with_help("remove the repeated literal");
//!
//! assert_eq!(diag.location().line(), 1);
//! assert_eq!(diag.location().column(), 25);
//! ```

mod diagnostic;
mod error_kind;
mod formatter;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_kind::ErrorKind;
pub use formatter::{Location, context, format_error};
pub use label::{FIRST_DECLARED, Label, LabelRole};
pub use parse_error::{ParseError, Result};
