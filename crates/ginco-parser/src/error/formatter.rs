//! Offset to line/column conversion and one-line error rendering.
//!
//! Every parse failure is rendered as
//! `[line:column] ...<context>: <message>`, where the context is the source
//! text starting at the failing offset.

use std::fmt;

/// Maximum number of characters shown as context.
const CONTEXT_CHARS: usize = 20;

/// A 1-based line and column in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    line: usize,
    column: usize,
}

impl Location {
    /// Locate `offset` in `text`.
    ///
    /// The offset is clamped into `[0, len - 1]` first, so offsets at or
    /// past the end of the text report the position of the last character.
    pub fn locate(text: &str, offset: usize) -> Self {
        let offset = clamp(text, offset);
        let before = &text[..offset];

        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let column = before[line_start..].chars().count() + 1;

        Self { line, column }
    }

    /// Get the 1-based line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the 1-based column.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Return up to 20 characters of `text` starting at `offset`.
///
/// Line breaks and tabs are shown as spaces so the rendering stays on one
/// line.
pub fn context(text: &str, offset: usize) -> String {
    let offset = clamp(text, offset);
    text[offset..]
        .chars()
        .take(CONTEXT_CHARS)
        .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
        .collect()
}

/// Render `message` for a failure at `offset` in `text`.
///
/// # Example
///
/// ```
/// # use ginco_parser::error::format_error;
/// let rendered = format_error("package 42 {}", 8, "no identifier found");
/// assert_eq!(rendered, "[1:9] ...42 {}: no identifier found");
/// ```
pub fn format_error(text: &str, offset: usize, message: &str) -> String {
    format!(
        "[{}] ...{}: {}",
        Location::locate(text, offset),
        context(text, offset),
        message
    )
}

/// Clamp `offset` into `[0, len - 1]`, moving back to a character boundary.
fn clamp(text: &str, offset: usize) -> usize {
    if text.is_empty() {
        return 0;
    }

    let mut offset = offset.min(text.len() - 1);
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_first_line() {
        let loc = Location::locate("package a {}", 8);

        assert_eq!(loc.line(), 1);
        assert_eq!(loc.column(), 9);
    }

    #[test]
    fn test_locate_after_newline() {
        let text = "ab\ncd";

        assert_eq!(Location::locate(text, 3).to_string(), "2:1");
        assert_eq!(Location::locate(text, 4).to_string(), "2:2");
    }

    #[test]
    fn test_locate_on_newline_belongs_to_previous_line() {
        assert_eq!(Location::locate("ab\ncd", 2).to_string(), "1:3");
    }

    #[test]
    fn test_locate_clamps_past_end() {
        assert_eq!(Location::locate("ab\ncd", 99).to_string(), "2:2");
        assert_eq!(Location::locate("", 5).to_string(), "1:1");
    }

    #[test]
    fn test_locate_counts_characters_for_columns() {
        // `é` is two bytes but one column
        let text = "é x";
        assert_eq!(Location::locate(text, 3).to_string(), "1:3");
        // Offset inside a multi-byte character falls back to its start
        assert_eq!(Location::locate(text, 1).to_string(), "1:1");
    }

    #[test]
    fn test_context_is_limited_and_single_line() {
        assert_eq!(context("package roleplaying {\n}", 0), "package roleplaying ");
        assert_eq!(context("a\tb\nc", 0), "a b c");
        assert_eq!(context("", 0), "");
    }

    #[test]
    fn test_format_error() {
        assert_eq!(format_error("abc", 1, "boom"), "[1:2] ...bc: boom");
        assert_eq!(
            format_error("x\n  @", 4, "trait not defined"),
            "[2:3] ...@: trait not defined"
        );
    }
}
