//! Lexical scanner for Ginco source text.
//!
//! There is no token list: every function takes the complete source text and
//! an absolute byte offset, scans one token starting there, and returns it
//! together with the offset immediately following it. The parser threads
//! that offset through its productions.
//!
//! Two layers are provided:
//!
//! - [`pop_token`] is the general scanner. It skips whitespace (space, tab,
//!   carriage return, newline) and reports comments as tokens.
//! - The narrowed helpers ([`pop_identifier`], [`pop_number`],
//!   [`pop_symbol`], [`pop_rune`], [`pop_scope`], [`pop_expected`],
//!   [`peek_token`]) are what the grammar uses. They also skip `#` comments,
//!   and each fails with its own [`ErrorKind`] when the next token is not
//!   what the grammar expects.

use winnow::{
    Parser as _,
    ascii::{digit1, multispace0, multispace1},
    combinator::{alt, opt, preceded, repeat, terminated},
    error::ModalResult,
    stream::{LocatingSlice, Location, Stream},
    token::{any, one_of, take_till, take_while},
};

use crate::{
    error::{Diagnostic, ErrorKind, Result},
    scope,
    span::Span,
    tokens::{Token, TokenKind},
};

pub(crate) type Input<'src> = LocatingSlice<&'src str>;

/// Create a winnow input positioned at `offset` in `text`.
///
/// Offsets past the end are clamped to the end of the text, and offsets
/// inside a multi-byte character move back to its first byte.
pub(crate) fn input_at(text: &str, offset: usize) -> Input<'_> {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }

    let mut input = LocatingSlice::new(text);
    let _ = input.next_slice(offset);
    input
}

/// Skip spaces, tabs, carriage returns and newlines.
pub(crate) fn whitespace(input: &mut Input<'_>) {
    let _: ModalResult<&str> = multispace0.parse_next(input);
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

fn is_brace(c: char) -> bool {
    c == '{' || c == '}'
}

/// A letter followed by letters and digits.
fn word<'src>(input: &mut Input<'src>) -> ModalResult<&'src str> {
    (
        one_of(is_letter),
        take_while(0.., |c: char| is_letter(c) || c.is_ascii_digit()),
    )
        .take()
        .parse_next(input)
}

fn digits<'src>(input: &mut Input<'src>) -> ModalResult<&'src str> {
    digit1.parse_next(input)
}

/// One character that is not a letter, digit or brace.
fn symbol<'src>(input: &mut Input<'src>) -> ModalResult<&'src str> {
    one_of(|c: char| !is_letter(c) && !c.is_ascii_digit() && !is_brace(c))
        .take()
        .parse_next(input)
}

/// One character that is not a brace.
fn rune<'src>(input: &mut Input<'src>) -> ModalResult<&'src str> {
    one_of(|c: char| !is_brace(c)).take().parse_next(input)
}

fn any_char<'src>(input: &mut Input<'src>) -> ModalResult<&'src str> {
    any.take().parse_next(input)
}

/// `#` up to (excluding) the end of the line; the newline itself is consumed.
fn comment<'src>(input: &mut Input<'src>) -> ModalResult<&'src str> {
    terminated(preceded('#', take_till(0.., '\n')), opt('\n'))
        .map(|body: &str| body.strip_suffix('\r').unwrap_or(body))
        .parse_next(input)
}

fn trivia(input: &mut Input<'_>) -> ModalResult<()> {
    repeat(0.., alt((multispace1.void(), comment.void()))).parse_next(input)
}

/// Return the offset of the first character after whitespace and comments.
pub fn skip_trivia(text: &str, offset: usize) -> usize {
    let mut input = input_at(text, offset);
    let _ = trivia(&mut input);
    input.current_token_start()
}

fn skip_whitespace(text: &str, offset: usize) -> usize {
    let mut input = input_at(text, offset);
    whitespace(&mut input);
    input.current_token_start()
}

/// Decide the token kind starting at `start` from its first character.
fn classify(text: &str, start: usize) -> TokenKind {
    match text.get(start..).and_then(|rest| rest.chars().next()) {
        None => TokenKind::Eof,
        Some(c) if c.is_ascii_digit() => TokenKind::Number,
        Some(c) if is_letter(c) => TokenKind::Identifier,
        Some('#') => TokenKind::Comment,
        Some('{') => TokenKind::Scope,
        Some(_) => TokenKind::Symbol,
    }
}

/// Run `parser` at `start` and wrap what it consumed as a token of `kind`.
fn scan_with<'src>(
    text: &'src str,
    start: usize,
    kind: TokenKind,
    mut parser: impl FnMut(&mut Input<'src>) -> ModalResult<&'src str>,
) -> Option<(Token<'src>, usize)> {
    let mut input = input_at(text, start);
    let value = parser(&mut input).ok()?;
    let end = input.current_token_start();
    Some((Token::new(kind, value, Span::new(start..end)), end))
}

fn scan_comment(text: &str, start: usize) -> Option<(Token<'_>, usize)> {
    let mut input = input_at(text, start);
    let value = comment(&mut input).ok()?;
    let value_start = start + 1;
    let span = Span::new(value_start..value_start + value.len());
    Some((
        Token::new(TokenKind::Comment, value, span),
        input.current_token_start(),
    ))
}

/// Look at the token at exactly `start` without extracting scopes.
///
/// A scope is reported by its opening brace only.
fn peek_at(text: &str, start: usize) -> Token<'_> {
    let scanned = match classify(text, start) {
        TokenKind::Eof => None,
        TokenKind::Number => scan_with(text, start, TokenKind::Number, digits),
        TokenKind::Identifier => scan_with(text, start, TokenKind::Identifier, word),
        TokenKind::Comment => scan_comment(text, start),
        TokenKind::Scope => scan_with(text, start, TokenKind::Scope, any_char),
        TokenKind::Symbol | TokenKind::Rune => {
            scan_with(text, start, TokenKind::Symbol, any_char)
        }
    };
    scanned.map_or_else(|| Token::eof(start), |(token, _)| token)
}

/// Describe the token at `start` for use in error messages.
pub(crate) fn describe(text: &str, start: usize) -> String {
    peek_at(text, start).to_string()
}

/// Build the error for "expected `kind`, found something else" at `start`.
fn expected(kind: ErrorKind, text: &str, start: usize) -> Diagnostic {
    let found = peek_at(text, start);
    let span = if found.kind() == TokenKind::Comment {
        Span::at(start)
    } else {
        found.span()
    };
    Diagnostic::new(
        kind,
        text,
        span,
        format!("{}, found {}", kind.description(), found),
    )
}

/// Scan the next token after whitespace.
///
/// Recognition order: end of input, number, identifier, comment, scope,
/// single-character symbol. Reaching the end of the input is not an error.
/// Only a scope can fail, when its braces are unbalanced.
///
/// # Example
///
/// ```
/// # use ginco_parser::lexer::pop_token;
/// # use ginco_parser::tokens::TokenKind;
/// let (token, next) = pop_token("  model Character", 0).unwrap();
/// assert_eq!(token.kind(), TokenKind::Identifier);
/// assert_eq!(token.value(), "model");
/// assert_eq!(next, 7);
/// ```
pub fn pop_token(text: &str, offset: usize) -> Result<(Token<'_>, usize)> {
    let start = skip_whitespace(text, offset);
    let scanned = match classify(text, start) {
        TokenKind::Eof => return Ok((Token::eof(start), start)),
        TokenKind::Scope => return scope::extract_scope(text, start),
        TokenKind::Number => scan_with(text, start, TokenKind::Number, digits),
        TokenKind::Identifier => scan_with(text, start, TokenKind::Identifier, word),
        TokenKind::Comment => scan_comment(text, start),
        TokenKind::Symbol | TokenKind::Rune => {
            scan_with(text, start, TokenKind::Symbol, any_char)
        }
    };
    scanned.ok_or_else(|| expected(ErrorKind::UnexpectedToken, text, start))
}

/// Return the next significant token without consuming it.
///
/// Whitespace and comments are skipped. A scope is reported by its opening
/// brace only; use [`pop_scope`] to extract it.
pub fn peek_token(text: &str, offset: usize) -> Token<'_> {
    peek_at(text, skip_trivia(text, offset))
}

/// Scan an identifier: a letter followed by letters and digits.
pub fn pop_identifier(text: &str, offset: usize) -> Result<(Token<'_>, usize)> {
    let start = skip_trivia(text, offset);
    scan_with(text, start, TokenKind::Identifier, word)
        .ok_or_else(|| expected(ErrorKind::NoIdentifierFound, text, start))
}

/// Scan a run of digits.
pub fn pop_number(text: &str, offset: usize) -> Result<(Token<'_>, usize)> {
    let start = skip_trivia(text, offset);
    scan_with(text, start, TokenKind::Number, digits)
        .ok_or_else(|| expected(ErrorKind::NoNumberFound, text, start))
}

/// Scan one character that is not a letter, digit or brace.
pub fn pop_symbol(text: &str, offset: usize) -> Result<(Token<'_>, usize)> {
    let start = skip_trivia(text, offset);
    scan_with(text, start, TokenKind::Symbol, symbol)
        .ok_or_else(|| expected(ErrorKind::NoSymbolFound, text, start))
}

/// Scan one character that is not a brace.
///
/// Unlike [`pop_symbol`] this accepts letters and digits, which is what the
/// cardinality marker `1` needs.
pub fn pop_rune(text: &str, offset: usize) -> Result<(Token<'_>, usize)> {
    let start = skip_trivia(text, offset);
    scan_with(text, start, TokenKind::Rune, rune)
        .ok_or_else(|| expected(ErrorKind::NoSymbolFound, text, start))
}

/// Scan a `#` comment after whitespace.
pub fn pop_comment(text: &str, offset: usize) -> Result<(Token<'_>, usize)> {
    let start = skip_whitespace(text, offset);
    scan_comment(text, start).ok_or_else(|| expected(ErrorKind::NoCommentFound, text, start))
}

/// Extract the brace-delimited scope after whitespace and comments.
///
/// See [`scope::extract_scope`].
pub fn pop_scope(text: &str, offset: usize) -> Result<(Token<'_>, usize)> {
    scope::extract_scope(text, skip_trivia(text, offset))
}

/// Scan the next token and require it to be exactly `kind` with `value`.
///
/// This is how the grammar consumes fixed keywords and punctuation.
///
/// # Example
///
/// ```
/// # use ginco_parser::lexer::pop_expected;
/// # use ginco_parser::tokens::TokenKind;
/// # use ginco_parser::error::ErrorKind;
/// let (_, next) = pop_expected("package roleplaying", 0, TokenKind::Identifier, "package").unwrap();
/// assert_eq!(next, 7);
///
/// let err = pop_expected("model A", 0, TokenKind::Identifier, "package").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TokenMismatch);
/// assert_eq!(err.message(), "expected identifier `package`, found `model`");
/// ```
pub fn pop_expected<'src>(
    text: &'src str,
    offset: usize,
    kind: TokenKind,
    value: &str,
) -> Result<(Token<'src>, usize)> {
    let found = peek_token(text, offset);
    if found.is(kind, value) {
        return Ok((found, found.span().end()));
    }

    Err(Diagnostic::new(
        ErrorKind::TokenMismatch,
        text,
        found.span(),
        format!("expected {kind} `{value}`, found {found}"),
    ))
}
