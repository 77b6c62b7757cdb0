//! Recursive-descent parser for Ginco source text.
//!
//! Every grammar production is a pure function of the complete source text
//! and an absolute byte offset. It returns the parsed node together with the
//! offset following it, or the [`Diagnostic`] for the first malformed
//! construct. There is no parser state beyond those two values.
//!
//! ```text
//! file        := package+
//! package     := 'package' IDENT scope(pkgBody)
//! pkgBody     := (trait | model | enum)*
//! trait       := '@' IDENT
//! model       := 'model' IDENT scope( ['fields' scope(fieldsBody)] )
//! fieldsBody  := (trait | field)*
//! field       := trait* ownership cardinality IDENT typeref
//! ownership   := '=' | '-'
//! cardinality := '1' | '?' | '*'
//! typeref     := IDENT
//! enum        := 'enum' IDENT scope( ['literals' scope(IDENT*)] )
//! ```
//!
//! The body of a scope is parsed against the source text cut off after the
//! scope's closing brace. Offsets stay absolute and the closing brace is the
//! last token a body loop can see.

use std::mem;

use indexmap::IndexMap;
use log::{debug, trace};

use ginco_core::schema::{
    Cardinality, Enum, Field, File, MarkerError, Model, Ownership, Package, Trait, TypeRef,
};

use crate::{
    error::{Diagnostic, ErrorKind, Result},
    lexer,
    span::Span,
    tokens::{Token, TokenKind},
};

pub const IMPORT: &str = "import";
pub const PACKAGE: &str = "package";
pub const MODEL: &str = "model";
pub const FIELDS: &str = "fields";
pub const ENUM: &str = "enum";
pub const LITERALS: &str = "literals";
pub const TRAIT_MARKER: &str = "@";

const SCOPE_CLOSE: &str = "}";

/// The source text up to and including the closing brace of `scope`.
fn body_text<'src>(text: &'src str, scope: &Token<'_>) -> &'src str {
    &text[..=scope.span().end()]
}

fn closes_scope(token: &Token<'_>) -> bool {
    token.is_eof() || token.is(TokenKind::Symbol, SCOPE_CLOSE)
}

/// Re-raise a scanner error as `kind`, keeping its position.
fn rename_error(err: Diagnostic, kind: ErrorKind, text: &str, message: &str) -> Diagnostic {
    let found = lexer::describe(text, err.offset());
    Diagnostic::new(kind, text, err.span(), format!("{message}, found {found}"))
}

fn unexpected(text: &str, token: &Token<'_>, expected: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::UnexpectedToken,
        text,
        token.span(),
        format!("unexpected {token}, expected {expected}"),
    )
}

fn invalid_marker(text: &str, token: &Token<'_>, err: &MarkerError, expected: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::UnexpectedToken,
        text,
        token.span(),
        format!("{err}, expected {expected}"),
    )
}

/// Fail unless the scope closes after `offset`.
fn expect_end(text: &str, offset: usize, after: &str) -> Result<()> {
    let token = lexer::peek_token(text, offset);
    if closes_scope(&token) {
        return Ok(());
    }
    Err(unexpected(text, &token, &format!("end of scope after `{after}` block")))
}

fn discard_traits(traits: &[Trait], scope: &str) {
    if !traits.is_empty() {
        debug!(count = traits.len(), scope; "Discarding traits not followed by a declaration");
    }
}

/// Parse a complete file: one or more packages up to the end of input.
///
/// The returned offset is the end of input, after any trailing whitespace
/// and comments.
///
/// # Errors
///
/// `import` at file scope fails with [`ErrorKind::ImportNotSupported`]
/// before anything else is parsed. An input without any package fails with
/// [`ErrorKind::TokenMismatch`].
pub fn parse_file(text: &str, offset: usize) -> Result<(File, usize)> {
    let mut packages = Vec::new();
    let mut offset = offset;

    loop {
        let token = lexer::peek_token(text, offset);
        if token.is_eof() && !packages.is_empty() {
            debug!(packages = packages.len(); "Parsed file");
            return Ok((File::new(packages), token.span().start()));
        }

        if token.is(TokenKind::Identifier, IMPORT) {
            return Err(Diagnostic::new(
                ErrorKind::ImportNotSupported,
                text,
                token.span(),
                "import keyword not supported yet",
            )
            .with_help("declare every package in a single file"));
        }

        let (package, next) = parse_package(text, offset)?;
        packages.push(package);
        offset = next;
    }
}

/// Parse `package <name> { ... }`.
pub fn parse_package(text: &str, offset: usize) -> Result<(Package, usize)> {
    trace!(offset; "Parsing package");
    let (_, offset) = lexer::pop_expected(text, offset, TokenKind::Identifier, PACKAGE)?;
    let (name, offset) = lexer::pop_identifier(text, offset)?;
    let (body, next) = lexer::pop_scope(text, offset)?;

    let body_text = body_text(text, &body);
    let mut offset = body.span().start();
    let mut pending = Vec::new();
    let mut models = Vec::new();
    let mut enums = Vec::new();

    loop {
        let token = lexer::peek_token(body_text, offset);
        if closes_scope(&token) {
            break;
        }

        if token.is(TokenKind::Symbol, TRAIT_MARKER) {
            let (trait_, next) = parse_trait(body_text, offset)?;
            pending.push(trait_);
            offset = next;
        } else if token.is(TokenKind::Identifier, MODEL) {
            let (model, next) = parse_model_with(body_text, offset, mem::take(&mut pending))?;
            models.push(model);
            offset = next;
        } else if token.is(TokenKind::Identifier, ENUM) {
            let (enum_, next) = parse_enum_with(body_text, offset, mem::take(&mut pending))?;
            enums.push(enum_);
            offset = next;
        } else {
            return Err(unexpected(body_text, &token, "`@`, `model` or `enum`"));
        }
    }
    discard_traits(&pending, PACKAGE);

    debug!(
        package = name.value(),
        models = models.len(),
        enums = enums.len();
        "Parsed package"
    );
    Ok((Package::new(name.value(), models, enums), next))
}

/// Parse `@<name>`.
///
/// # Errors
///
/// [`ErrorKind::NoSymbolFound`] if no symbol comes first,
/// [`ErrorKind::TokenMismatch`] for a symbol other than `@`, and
/// [`ErrorKind::TraitNotDefined`] if `@` is not followed by a name.
pub fn parse_trait(text: &str, offset: usize) -> Result<(Trait, usize)> {
    let (marker, offset) = lexer::pop_symbol(text, offset)?;
    if marker.value() != TRAIT_MARKER {
        return Err(Diagnostic::new(
            ErrorKind::TokenMismatch,
            text,
            marker.span(),
            format!("expected symbol `{TRAIT_MARKER}`, found {marker}"),
        ));
    }

    let (name, next) = lexer::pop_identifier(text, offset).map_err(|err| {
        rename_error(
            err,
            ErrorKind::TraitNotDefined,
            text,
            "trait not defined: expected a name after `@`",
        )
    })?;
    trace!(name = name.value(); "Parsed trait");
    Ok((Trait::new(name.value()), next))
}

/// Parse a sequence of traits, possibly empty.
pub fn parse_traits(text: &str, offset: usize) -> Result<(Vec<Trait>, usize)> {
    let mut traits = Vec::new();
    let mut offset = offset;
    while lexer::peek_token(text, offset).is(TokenKind::Symbol, TRAIT_MARKER) {
        let (trait_, next) = parse_trait(text, offset)?;
        traits.push(trait_);
        offset = next;
    }
    Ok((traits, offset))
}

/// Parse `model <name> { [fields { ... }] }` without preceding traits.
pub fn parse_model(text: &str, offset: usize) -> Result<(Model, usize)> {
    parse_model_with(text, offset, Vec::new())
}

/// Parse a model and attach `traits` to it.
pub fn parse_model_with(text: &str, offset: usize, traits: Vec<Trait>) -> Result<(Model, usize)> {
    let (_, offset) = lexer::pop_expected(text, offset, TokenKind::Identifier, MODEL)?;
    let (name, offset) = lexer::pop_identifier(text, offset).map_err(|err| {
        rename_error(
            err,
            ErrorKind::ModelNameNotDefined,
            text,
            "model name not defined",
        )
    })?;
    let (body, next) = lexer::pop_scope(text, offset)?;

    let body_text = body_text(text, &body);
    let start = body.span().start();
    let fields = if closes_scope(&lexer::peek_token(body_text, start)) {
        Vec::new()
    } else {
        let (fields, offset) = parse_fields(body_text, start)?;
        expect_end(body_text, offset, FIELDS)?;
        fields
    };

    debug!(
        model = name.value(),
        traits = traits.len(),
        fields = fields.len();
        "Parsed model"
    );
    Ok((Model::new(name.value(), traits, fields), next))
}

/// Parse `fields { ... }`.
///
/// Traits inside the block attach to the next field. Traits after the last
/// field are dropped.
pub fn parse_fields(text: &str, offset: usize) -> Result<(Vec<Field>, usize)> {
    let (_, offset) = lexer::pop_expected(text, offset, TokenKind::Identifier, FIELDS)?;
    let (body, next) = lexer::pop_scope(text, offset)?;

    let body_text = body_text(text, &body);
    let mut offset = body.span().start();
    let mut pending = Vec::new();
    let mut fields = Vec::new();

    loop {
        let token = lexer::peek_token(body_text, offset);
        if closes_scope(&token) {
            break;
        }

        if token.is(TokenKind::Symbol, TRAIT_MARKER) {
            let (trait_, next) = parse_trait(body_text, offset)?;
            pending.push(trait_);
            offset = next;
        } else {
            let (field, next) = parse_field_with(body_text, offset, mem::take(&mut pending))?;
            fields.push(field);
            offset = next;
        }
    }
    discard_traits(&pending, FIELDS);

    Ok((fields, next))
}

/// Parse a field with its leading traits.
///
/// # Example
///
/// ```
/// # use ginco_parser::parser::parse_field;
/// # use ginco_core::schema::{Cardinality, Ownership};
/// let (field, next) = parse_field("=1 id uuid", 0).unwrap();
/// assert_eq!(field.name(), "id");
/// assert_eq!(field.ownership(), Ownership::Composition);
/// assert_eq!(field.cardinality(), Cardinality::One);
/// assert_eq!(field.type_ref().name(), "uuid");
/// assert_eq!(next, 10);
/// ```
pub fn parse_field(text: &str, offset: usize) -> Result<(Field, usize)> {
    let (traits, offset) = parse_traits(text, offset)?;
    parse_field_with(text, offset, traits)
}

/// Parse `<ownership><cardinality> <name> <type>` and attach `traits`.
pub fn parse_field_with(text: &str, offset: usize, traits: Vec<Trait>) -> Result<(Field, usize)> {
    let (ownership, offset) = parse_ownership(text, offset)?;
    let (cardinality, offset) = parse_cardinality(text, offset)?;
    let (name, offset) = lexer::pop_identifier(text, offset)?;
    let (type_ref, next) = parse_type_ref(text, offset)?;

    trace!(
        field = name.value(),
        ownership:%,
        cardinality:%,
        type_ref:%;
        "Parsed field"
    );
    Ok((
        Field::new(name.value(), type_ref, ownership, cardinality, traits),
        next,
    ))
}

fn marker_char(token: &Token<'_>) -> char {
    token.value().chars().next().unwrap_or_default()
}

/// Parse an ownership marker: `=` or `-`.
pub fn parse_ownership(text: &str, offset: usize) -> Result<(Ownership, usize)> {
    let (token, next) = lexer::pop_symbol(text, offset)?;
    let ownership = Ownership::try_from(marker_char(&token))
        .map_err(|err| invalid_marker(text, &token, &err, "`=` or `-`"))?;
    Ok((ownership, next))
}

/// Parse a cardinality marker: `1`, `?` or `*`.
pub fn parse_cardinality(text: &str, offset: usize) -> Result<(Cardinality, usize)> {
    let (token, next) = lexer::pop_rune(text, offset)?;
    let cardinality = Cardinality::try_from(marker_char(&token))
        .map_err(|err| invalid_marker(text, &token, &err, "`1`, `?` or `*`"))?;
    Ok((cardinality, next))
}

/// Parse a field type. Types are bare names in the enclosing package.
pub fn parse_type_ref(text: &str, offset: usize) -> Result<(TypeRef, usize)> {
    let (name, next) = lexer::pop_identifier(text, offset)?;
    Ok((TypeRef::local(name.value()), next))
}

/// Parse `enum <name> { [literals { ... }] }` without preceding traits.
pub fn parse_enum(text: &str, offset: usize) -> Result<(Enum, usize)> {
    parse_enum_with(text, offset, Vec::new())
}

/// Parse an enum and attach `traits` to it.
pub fn parse_enum_with(text: &str, offset: usize, traits: Vec<Trait>) -> Result<(Enum, usize)> {
    let (_, offset) = lexer::pop_expected(text, offset, TokenKind::Identifier, ENUM)?;
    let (name, offset) = lexer::pop_identifier(text, offset)?;
    let (body, next) = lexer::pop_scope(text, offset)?;

    let body_text = body_text(text, &body);
    let start = body.span().start();
    let literals = if closes_scope(&lexer::peek_token(body_text, start)) {
        Vec::new()
    } else {
        let (literals, offset) = parse_literals(body_text, start)?;
        expect_end(body_text, offset, LITERALS)?;
        literals
    };

    debug!(
        enum_name = name.value(),
        traits = traits.len(),
        literals = literals.len();
        "Parsed enum"
    );
    Ok((Enum::new(name.value(), traits, literals), next))
}

/// Parse `literals { <ident>* }`.
///
/// # Errors
///
/// A literal that repeats an earlier one fails with
/// [`ErrorKind::DuplicateLiteral`] at the repetition. The diagnostic
/// carries a secondary label on the first occurrence.
pub fn parse_literals(text: &str, offset: usize) -> Result<(Vec<String>, usize)> {
    let (_, offset) = lexer::pop_expected(text, offset, TokenKind::Identifier, LITERALS)?;
    let (body, next) = lexer::pop_scope(text, offset)?;

    let body_text = body_text(text, &body);
    let mut offset = body.span().start();
    let mut seen: IndexMap<&str, Span> = IndexMap::new();

    while !closes_scope(&lexer::peek_token(body_text, offset)) {
        let (literal, after) = lexer::pop_identifier(body_text, offset)?;
        if let Some(first) = seen.get(literal.value()) {
            return Err(Diagnostic::new(
                ErrorKind::DuplicateLiteral,
                body_text,
                literal.span(),
                format!("duplicate literal found: `{}`", literal.value()),
            )
            .with_first_declaration(body_text, *first));
        }
        seen.insert(literal.value(), literal.span());
        offset = after;
    }

    let literals = seen.into_keys().map(String::from).collect();
    Ok((literals, next))
}
