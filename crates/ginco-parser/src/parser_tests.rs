//! Unit tests for the grammar productions.
//!
//! Each production is exercised on its own with absolute offsets, then the
//! file-level entry point is tested on complete sources.

use ginco_core::schema::{Cardinality, Ownership};

use crate::{
    error::{Diagnostic, ErrorKind},
    parser::*,
};

const ROLEPLAYING: &str = "package roleplaying {
  @changeset
  model Character {
    fields {
      @noChangeset
      =1 id uuid
      =? name string
      -1 type CharacterType
      =* skills Skill
    }
  }
}";

/// Parse with `f` and panic with the rendered diagnostic on failure.
fn ok<T>(result: Result<T, Diagnostic>) -> T {
    result.unwrap_or_else(|err| panic!("Expected parsing to succeed, got: {err}"))
}

/// Assert that `result` failed with `kind` and return the diagnostic.
fn assert_fails<T: std::fmt::Debug>(result: Result<T, Diagnostic>, kind: ErrorKind) -> Diagnostic {
    match result {
        Ok(value) => panic!("Expected {kind} error, parsed {value:?}"),
        Err(err) => {
            assert_eq!(err.kind(), kind, "unexpected error: {err}");
            err
        }
    }
}

// =============================================================================
// Traits
// =============================================================================

#[test]
fn test_parse_trait() {
    let (trait_, next) = ok(parse_trait("@FieldTrait1\n=* skills Skill", 0));

    assert_eq!(trait_.name(), "FieldTrait1");
    assert_eq!(next, 12);
}

#[test]
fn test_parse_trait_without_name() {
    let err = assert_fails(parse_trait("@", 0), ErrorKind::TraitNotDefined);

    assert_eq!(err.offset(), 1);
    assert_eq!(
        err.message(),
        "trait not defined: expected a name after `@`, found end of input"
    );
}

#[test]
fn test_parse_trait_without_marker() {
    assert_fails(parse_trait("Not a trait", 0), ErrorKind::NoSymbolFound);
    assert_fails(parse_trait("=1 id uuid", 0), ErrorKind::TokenMismatch);
}

#[test]
fn test_parse_traits_in_order() {
    let (traits, next) = ok(parse_traits("@a @b\n@c model", 0));
    let names: Vec<_> = traits.iter().map(|t| t.name()).collect();

    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(next, 8);

    let (traits, next) = ok(parse_traits("model", 0));
    assert!(traits.is_empty());
    assert_eq!(next, 0);
}

// =============================================================================
// Fields
// =============================================================================

#[test]
fn test_parse_field() {
    let (field, next) = ok(parse_field("=1 name string", 0));

    assert_eq!(field.name(), "name");
    assert_eq!(field.type_ref().name(), "string");
    assert_eq!(field.type_ref().package(), None);
    assert_eq!(field.ownership(), Ownership::Composition);
    assert_eq!(field.cardinality(), Cardinality::One);
    assert!(field.traits().is_empty());
    assert_eq!(next, 14);
}

#[test]
fn test_parse_field_with_leading_trait() {
    let (field, next) = ok(parse_field("@FieldTrait1\n=* skills Skill", 0));

    assert_eq!(field.name(), "skills");
    assert_eq!(field.cardinality(), Cardinality::Collection);
    assert!(field.has_trait("FieldTrait1"));
    assert_eq!(next, 28);
}

#[test]
fn test_parse_field_markers() {
    let cases = [
        ("=1 a T", Ownership::Composition, Cardinality::One),
        ("=? a T", Ownership::Composition, Cardinality::ZeroOrOne),
        ("-* a T", Ownership::Aggregation, Cardinality::Collection),
        ("- ? a T", Ownership::Aggregation, Cardinality::ZeroOrOne),
    ];

    for (source, ownership, cardinality) in cases {
        let (field, _) = ok(parse_field(source, 0));
        assert_eq!(field.ownership(), ownership, "for {source:?}");
        assert_eq!(field.cardinality(), cardinality, "for {source:?}");
    }
}

#[test]
fn test_parse_field_reversed_markers_rejected() {
    // The old cardinality-first order is not accepted
    assert_fails(parse_field("1= id uuid", 0), ErrorKind::NoSymbolFound);
}

#[test]
fn test_parse_field_invalid_markers() {
    let err = assert_fails(parse_field("+1 id uuid", 0), ErrorKind::UnexpectedToken);
    assert_eq!(err.offset(), 0);

    let err = assert_fails(parse_field("=x id uuid", 0), ErrorKind::UnexpectedToken);
    assert_eq!(err.offset(), 1);
}

#[test]
fn test_parse_field_missing_parts() {
    assert_fails(parse_field("=1", 0), ErrorKind::NoIdentifierFound);
    assert_fails(parse_field("=1 id", 0), ErrorKind::NoIdentifierFound);
    assert_fails(parse_field("=", 0), ErrorKind::NoSymbolFound);
}

#[test]
fn test_parse_fields_attaches_traits_to_next_field() {
    let source = "fields {
        @a @b
        =1 id uuid
        -? owner Person
        @dangling
    }";
    let (fields, next) = ok(parse_fields(source, 0));

    assert_eq!(fields.len(), 2);
    let names: Vec<_> = fields[0].traits().iter().map(|t| t.name()).collect();
    assert_eq!(names, ["a", "b"]);
    assert!(fields[1].traits().is_empty());
    assert_eq!(next, source.len());
}

#[test]
fn test_parse_fields_with_comments() {
    let source = "fields { # identity\n =1 id uuid # primary key\n }";
    let (fields, _) = ok(parse_fields(source, 0));

    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name(), "id");
}

// =============================================================================
// Models
// =============================================================================

#[test]
fn test_parse_model_empty_body() {
    let (model, next) = ok(parse_model("model Empty {}", 0));

    assert_eq!(model.name(), "Empty");
    assert!(model.fields().is_empty());
    assert!(model.traits().is_empty());
    assert_eq!(next, 14);
}

#[test]
fn test_parse_model_without_name() {
    let err = assert_fails(parse_model("model { }", 0), ErrorKind::ModelNameNotDefined);

    assert_eq!(err.offset(), 6);
    assert_eq!(err.message(), "model name not defined, found `{`");
}

#[test]
fn test_parse_model_requires_fields_keyword() {
    let err = assert_fails(parse_model("model A { attrs { } }", 0), ErrorKind::TokenMismatch);

    assert_eq!(err.offset(), 10);
    assert_eq!(err.message(), "expected identifier `fields`, found `attrs`");
}

#[test]
fn test_parse_model_rejects_trailing_tokens() {
    let err = assert_fails(
        parse_model("model A { fields { } extra }", 0),
        ErrorKind::UnexpectedToken,
    );
    assert_eq!(err.offset(), 21);
}

#[test]
fn test_parse_model_unbalanced() {
    assert_fails(parse_model("model A { fields {", 0), ErrorKind::UnbalancedScope);
    assert_fails(parse_model("model A", 0), ErrorKind::NoScopeFound);
}

#[test]
fn test_parse_model_with_traits() {
    for count in 0..4 {
        let source: String = (0..count)
            .map(|i| format!("@t{i} "))
            .chain(std::iter::once("model M {}".to_string()))
            .collect();
        let (traits, offset) = ok(parse_traits(&source, 0));
        let (model, _) = ok(parse_model_with(&source, offset, traits));

        assert_eq!(model.traits().len(), count, "for {source:?}");
        for (i, trait_) in model.traits().iter().enumerate() {
            assert_eq!(trait_.name(), format!("t{i}"));
        }
    }
}

// =============================================================================
// Enums
// =============================================================================

#[test]
fn test_parse_enum() {
    let source = "enum CharacterType {
        literals {
            Warrior
            Mage
            Rogue
        }
    }";
    let (enum_, next) = ok(parse_enum(source, 0));

    assert_eq!(enum_.name(), "CharacterType");
    assert_eq!(enum_.literals(), ["Warrior", "Mage", "Rogue"]);
    assert_eq!(next, source.len());
}

#[test]
fn test_parse_enum_empty() {
    let (enum_, _) = ok(parse_enum("enum E {}", 0));
    assert!(enum_.literals().is_empty());

    let (enum_, _) = ok(parse_enum("enum E { literals {} }", 0));
    assert!(enum_.literals().is_empty());
}

#[test]
fn test_parse_enum_duplicate_literal() {
    let err = assert_fails(
        parse_enum("enum E { literals { a b a } }", 0),
        ErrorKind::DuplicateLiteral,
    );

    assert_eq!(err.offset(), 24);
    assert_eq!(err.message(), "duplicate literal found: `a`");
    assert_eq!(err.labels().len(), 2);
    assert_eq!(err.labels()[1].span().start(), 20);
    assert_eq!(err.labels()[1].message(), "first declared here");
    assert_eq!(err.labels()[1].location().column(), 21);
}

#[test]
fn test_parse_enum_non_identifier_literal() {
    assert_fails(
        parse_enum("enum E { literals { a 42 } }", 0),
        ErrorKind::NoIdentifierFound,
    );
}

#[test]
fn test_parse_literals_requires_keyword() {
    assert_fails(parse_literals("values { a }", 0), ErrorKind::TokenMismatch);
}

// =============================================================================
// Packages and files
// =============================================================================

#[test]
fn test_parse_package_mixed_body() {
    let source = "package shop {
        @audited
        enum Status { literals { Open Closed } }
        model Order { fields { =1 status Status } }
        model Customer {}
    }";
    let (package, next) = ok(parse_package(source, 0));

    assert_eq!(package.name(), "shop");
    assert_eq!(package.models().len(), 2);
    assert_eq!(package.enums().len(), 1);
    assert_eq!(package.enums()[0].traits()[0].name(), "audited");
    assert!(package.models()[0].traits().is_empty());
    assert_eq!(next, source.len());
}

#[test]
fn test_parse_package_unknown_token() {
    let err = assert_fails(
        parse_package("package p { struct A {} }", 0),
        ErrorKind::UnexpectedToken,
    );

    assert_eq!(err.offset(), 12);
    assert_eq!(
        err.message(),
        "unexpected `struct`, expected `@`, `model` or `enum`"
    );
}

#[test]
fn test_parse_package_dangling_traits_are_ignored() {
    let (package, _) = ok(parse_package("package p { model A {} @orphan }", 0));
    assert_eq!(package.models().len(), 1);
    assert!(package.models()[0].traits().is_empty());
}

#[test]
fn test_parse_package_without_name() {
    assert_fails(parse_package("package {}", 0), ErrorKind::NoIdentifierFound);
}

#[test]
fn test_parse_file_roleplaying() {
    let (file, next) = ok(parse_file(ROLEPLAYING, 0));

    assert_eq!(next, ROLEPLAYING.len());
    assert_eq!(file.packages().len(), 1);

    let package = &file.packages()[0];
    assert_eq!(package.name(), "roleplaying");
    assert_eq!(package.models().len(), 1);

    let model = &package.models()[0];
    assert_eq!(model.name(), "Character");
    assert_eq!(model.traits().len(), 1);
    assert!(model.has_trait("changeset"));

    let names: Vec<_> = model.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["id", "name", "type", "skills"]);
    assert!(model.fields()[0].has_trait("noChangeset"));
    assert!(model.fields()[1..].iter().all(|f| f.traits().is_empty()));

    let kind = model.field("type").map(|f| (f.ownership(), f.type_ref().name()));
    assert_eq!(kind, Some((Ownership::Aggregation, "CharacterType")));
}

#[test]
fn test_parse_file_multiple_packages() {
    let source = "# header\npackage a {}\npackage b { model X {} }\n# trailer";
    let (file, next) = ok(parse_file(source, 0));

    assert_eq!(file.packages().len(), 2);
    assert_eq!(file.packages()[1].models()[0].name(), "X");
    assert_eq!(next, source.len());
}

#[test]
fn test_parse_file_import_rejected() {
    let err = assert_fails(parse_file("import other\npackage a {}", 0), ErrorKind::ImportNotSupported);
    assert_eq!(err.offset(), 0);

    let err = assert_fails(parse_file("package a {}\nimport other", 0), ErrorKind::ImportNotSupported);
    assert_eq!(err.offset(), 13);
}

#[test]
fn test_parse_file_empty_input() {
    let err = assert_fails(parse_file("  # nothing here\n", 0), ErrorKind::TokenMismatch);
    assert_eq!(err.message(), "expected identifier `package`, found end of input");
}

#[test]
fn test_parse_file_error_location() {
    let source = "package p {\n  model A {\n    fields { =1 id }\n  }\n}";
    let err = assert_fails(parse_file(source, 0), ErrorKind::NoIdentifierFound);

    assert_eq!(err.location().line(), 3);
    assert_eq!(err.location().column(), 20);
}

#[test]
fn test_parse_file_is_idempotent() {
    let first = ok(parse_file(ROLEPLAYING, 0));
    let second = ok(parse_file(ROLEPLAYING, 0));

    assert_eq!(first, second);
}
