//! Enum declarations.

use serde::{Deserialize, Serialize};

use crate::schema::model::Trait;

/// A named enumeration with unique literal names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    name: String,
    #[serde(default)]
    traits: Vec<Trait>,
    #[serde(default)]
    literals: Vec<String>,
}

impl Enum {
    /// Create a new Enum.
    ///
    /// Literal uniqueness is enforced by the parser and by
    /// `ginco::validate` for YAML input, not here.
    pub fn new(name: impl Into<String>, traits: Vec<Trait>, literals: Vec<String>) -> Self {
        Self {
            name: name.into(),
            traits,
            literals,
        }
    }

    /// Get the enum name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the traits attached to this enum.
    pub fn traits(&self) -> &[Trait] {
        &self.traits
    }

    /// Borrow the literal names in declaration order.
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Returns `true` if the enum declares the given literal.
    pub fn contains(&self, literal: &str) -> bool {
        self.literals.iter().any(|l| l == literal)
    }
}
