//! Brace-balanced scope extraction.
//!
//! A scope is everything between an opening `{` and its matching `}`. Nested
//! braces are counted, including braces that appear inside comments.

use winnow::{
    Parser as _,
    error::ModalResult,
    stream::Location,
    token::{one_of, take_till},
};

use crate::{
    error::{Diagnostic, ErrorKind, Result},
    lexer::{self, Input},
    span::Span,
    tokens::{Token, TokenKind},
};

fn brace(input: &mut Input<'_>) -> ModalResult<char> {
    one_of(['{', '}']).parse_next(input)
}

fn till_brace<'src>(input: &mut Input<'src>) -> ModalResult<&'src str> {
    take_till(0.., ['{', '}']).parse_next(input)
}

/// Extract the scope starting at `offset`, after optional whitespace.
///
/// The returned token holds the text strictly between the outer braces and
/// its span covers exactly that text. The returned offset is one past the
/// closing brace.
///
/// # Errors
///
/// - [`ErrorKind::NoScopeFound`] if the first non-whitespace character is
///   not `{`.
/// - [`ErrorKind::UnbalancedScope`] if the input ends before the opening
///   brace is matched. The error points at the opening brace.
///
/// # Example
///
/// ```
/// # use ginco_parser::scope::extract_scope;
/// let (scope, next) = extract_scope("{{{}}}", 0).unwrap();
/// assert_eq!(scope.value(), "{{}}");
/// assert_eq!(scope.span().start(), 1);
/// assert_eq!(next, 6);
/// ```
pub fn extract_scope(text: &str, offset: usize) -> Result<(Token<'_>, usize)> {
    let mut input = lexer::input_at(text, offset);
    lexer::whitespace(&mut input);

    let open = input.current_token_start();
    if !matches!(brace(&mut input), Ok('{')) {
        let found = lexer::describe(text, open);
        return Err(Diagnostic::new(
            ErrorKind::NoScopeFound,
            text,
            Span::at(open),
            format!("no scope found: expected `{{`, found {found}"),
        ));
    }

    let inner_start = open + 1;
    let mut depth = 1usize;
    loop {
        let _ = till_brace(&mut input);
        let position = input.current_token_start();
        match brace(&mut input) {
            Ok('{') => depth += 1,
            Ok(_) => {
                depth -= 1;
                if depth == 0 {
                    let span = Span::new(inner_start..position);
                    let value = &text[inner_start..position];
                    return Ok((Token::new(TokenKind::Scope, value, span), position + 1));
                }
            }
            Err(_) => {
                return Err(Diagnostic::new(
                    ErrorKind::UnbalancedScope,
                    text,
                    Span::new(open..text.len()),
                    format!("unable to find matching scope brackets: {depth} `{{` left open"),
                )
                .with_help("add the missing `}`"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_nested_scope() {
        let (scope, next) = extract_scope("{{{}}}", 0).unwrap();

        assert_eq!(scope.kind(), TokenKind::Scope);
        assert_eq!(scope.value(), "{{}}");
        assert_eq!(scope.span(), Span::new(1..5));
        assert_eq!(next, 6);
    }

    #[test]
    fn test_scope_after_whitespace() {
        let text = " { inner thing { with some stuff }} and some more";
        let (scope, next) = extract_scope(text, 0).unwrap();

        assert_eq!(scope.value(), " inner thing { with some stuff }");
        assert_eq!(scope.span().start(), 2);
        assert_eq!(next, 35);
        assert_eq!(&text[next..], " and some more");
    }

    #[test]
    fn test_empty_scope() {
        let (scope, next) = extract_scope("{}", 0).unwrap();

        assert_eq!(scope.value(), "");
        assert!(scope.span().is_empty());
        assert_eq!(next, 2);
    }

    #[test]
    fn test_no_scope_found() {
        let err = extract_scope("something first { inner }", 0).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NoScopeFound);
        assert_eq!(err.offset(), 0);
        assert_eq!(
            err.message(),
            "no scope found: expected `{`, found `something`"
        );
    }

    #[test]
    fn test_closing_brace_is_not_a_scope() {
        let err = extract_scope("  }", 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoScopeFound);
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn test_unbalanced_scope() {
        let err = extract_scope("a { {", 1).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnbalancedScope);
        assert_eq!(err.span(), Span::new(2..5));
        assert_eq!(err.help(), Some("add the missing `}`"));
    }

    #[test]
    fn test_braces_in_comments_are_counted() {
        let text = "{ # stray }\n }";
        let (scope, next) = extract_scope(text, 0).unwrap();

        assert_eq!(scope.value(), " # stray ");
        assert_eq!(next, 11);
    }

    #[test]
    fn test_non_ascii_content() {
        let text = "{ größe }";
        let (scope, next) = extract_scope(text, 0).unwrap();

        assert_eq!(scope.value(), " größe ");
        assert_eq!(next, text.len());
    }

    proptest! {
        #[test]
        fn prop_nested_scope_is_extracted_whole(
            head in "[a-z #]{0,12}",
            nested in "[a-z ]{0,12}",
            tail in "[a-z ]{0,12}",
        ) {
            let inner = format!("{head}{{{nested}}}{tail}");
            let text = format!("{{{inner}}} rest");
            let (scope, next) = extract_scope(&text, 0).unwrap();

            prop_assert_eq!(scope.value(), inner.as_str());
            prop_assert_eq!(scope.span(), Span::new(1..1 + inner.len()));
            prop_assert_eq!(next, inner.len() + 2);
        }
    }
}
