//! # Ginco Parser
//!
//! Scanner and recursive-descent parser for the Ginco modeling language.
//! Source text goes in, a [`ginco_core::schema::File`] comes out.
//!
//! The building blocks are public so that every production can be driven on
//! its own:
//!
//! - [`lexer`] scans one token at an offset, on demand
//! - [`scope`] extracts brace-balanced blocks
//! - [`parser`] holds one function per grammar production
//! - [`error`] renders failures with their line and column
//!
//! ## Usage
//!
//! ```
//! # use ginco_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         package roleplaying {
//!             @changeset
//!             model Character {
//!                 fields {
//!                     =1 id uuid
//!                     -1 type CharacterType
//!                 }
//!             }
//!             enum CharacterType { literals { Warrior Mage } }
//!         }
//!     "#;
//!
//!     let file = parse(source)?;
//!     assert_eq!(file.packages()[0].models()[0].fields().len(), 2);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
#[cfg(test)]
mod parser_tests;
pub mod scope;
mod span;
pub mod tokens;

pub use error::ParseError;
pub use span::Span;

use log::{debug, info};

use ginco_core::schema::File;

/// Parse a complete Ginco source text.
///
/// This is the main entry point. Parsing stops at the first malformed
/// construct; there is no recovery.
///
/// # Errors
///
/// Returns a [`ParseError`] whose diagnostic carries the error kind, the
/// offset and the line/column of the failure.
///
/// # Example
///
/// ```
/// # use ginco_parser::{parse, error::ErrorKind};
/// let err = parse("import other").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::ImportNotSupported);
/// ```
pub fn parse(source: &str) -> Result<File, ParseError> {
    debug!(len = source.len(); "Parsing source");
    let (file, _) = parser::parse_file(source, 0)?;
    info!(packages = file.packages().len(); "Parsed schema");
    Ok(file)
}
