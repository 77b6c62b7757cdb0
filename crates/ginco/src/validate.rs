//! Validation of schema trees that did not come from the DSL parser.
//!
//! The parser only ever builds well-formed nodes. A YAML document is
//! deserialized straight into the schema types, so the same rules are
//! checked here after the fact:
//!
//! - **Names**: package, model, enum, field, trait, literal and type names
//!   are identifiers (a letter followed by letters and ASCII digits)
//! - **Literals**: unique within their enum

use std::collections::HashSet;

use log::debug;
use thiserror::Error;

use crate::schema::{Enum, Field, File, Model, Package, Trait};

/// A rule a schema tree breaks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {node} name `{name}`: expected an identifier")]
    InvalidName { node: &'static str, name: String },

    #[error("duplicate literal `{literal}` in enum `{enumeration}`")]
    DuplicateLiteral { enumeration: String, literal: String },
}

/// Returns `true` for a letter followed by letters and ASCII digits.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(char::is_alphabetic)
        && chars.all(|c| c.is_alphabetic() || c.is_ascii_digit())
}

#[derive(Default)]
struct Validator {
    errors: Vec<ValidationError>,
}

impl Validator {
    fn check_name(&mut self, node: &'static str, name: &str) {
        if !is_identifier(name) {
            self.errors.push(ValidationError::InvalidName {
                node,
                name: name.to_string(),
            });
        }
    }

    fn visit_traits(&mut self, traits: &[Trait]) {
        for trait_ in traits {
            self.check_name("trait", trait_.name());
        }
    }

    fn visit_package(&mut self, package: &Package) {
        self.check_name("package", package.name());
        for model in package.models() {
            self.visit_model(model);
        }
        for enumeration in package.enums() {
            self.visit_enum(enumeration);
        }
    }

    fn visit_model(&mut self, model: &Model) {
        self.check_name("model", model.name());
        self.visit_traits(model.traits());
        for field in model.fields() {
            self.visit_field(field);
        }
    }

    fn visit_field(&mut self, field: &Field) {
        self.check_name("field", field.name());
        self.visit_traits(field.traits());

        let type_ref = field.type_ref();
        self.check_name("type", type_ref.name());
        if let Some(package) = type_ref.package() {
            self.check_name("package", package);
        }
    }

    fn visit_enum(&mut self, enumeration: &Enum) {
        self.check_name("enum", enumeration.name());
        self.visit_traits(enumeration.traits());

        let mut seen = HashSet::new();
        for literal in enumeration.literals() {
            self.check_name("literal", literal);
            if !seen.insert(literal.as_str()) {
                self.errors.push(ValidationError::DuplicateLiteral {
                    enumeration: enumeration.name().to_string(),
                    literal: literal.clone(),
                });
            }
        }
    }
}

/// Check every node of `file`.
///
/// Returns the first problem found, in declaration order.
pub fn validate_file(file: &File) -> Result<(), ValidationError> {
    let mut validator = Validator::default();
    for package in file.packages() {
        validator.visit_package(package);
    }

    debug!(errors = validator.errors.len(); "Validated schema");
    match validator.errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
