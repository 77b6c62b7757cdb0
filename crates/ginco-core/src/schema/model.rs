//! Models and their members.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a character is not a known ownership or cardinality marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{marker}` is not a valid {category} marker")]
pub struct MarkerError {
    marker: char,
    category: &'static str,
}

impl MarkerError {
    /// Get the rejected marker character.
    pub fn marker(&self) -> char {
        self.marker
    }
}

/// A `@name` tag attached to a model, enum or field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trait {
    name: String,
}

impl Trait {
    /// Create a new Trait.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the trait name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)
    }
}

/// Whether a field's type is owned by the model or only referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ownership {
    /// `=` - the model owns the referenced value.
    Composition,
    /// `-` - the model references a value owned elsewhere.
    Aggregation,
}

impl Ownership {
    /// Returns the source marker for this ownership.
    pub fn marker(self) -> char {
        match self {
            Ownership::Composition => '=',
            Ownership::Aggregation => '-',
        }
    }
}

impl TryFrom<char> for Ownership {
    type Error = MarkerError;

    fn try_from(marker: char) -> Result<Self, Self::Error> {
        match marker {
            '=' => Ok(Ownership::Composition),
            '-' => Ok(Ownership::Aggregation),
            _ => Err(MarkerError {
                marker,
                category: "ownership",
            }),
        }
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ownership::Composition => write!(f, "composition"),
            Ownership::Aggregation => write!(f, "aggregation"),
        }
    }
}

/// How many instances of a field's type are associated with the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// `?` - optional.
    ZeroOrOne,
    /// `1` - exactly one.
    One,
    /// `*` - any number.
    Collection,
}

impl Cardinality {
    /// Returns the source marker for this cardinality.
    pub fn marker(self) -> char {
        match self {
            Cardinality::ZeroOrOne => '?',
            Cardinality::One => '1',
            Cardinality::Collection => '*',
        }
    }
}

impl TryFrom<char> for Cardinality {
    type Error = MarkerError;

    fn try_from(marker: char) -> Result<Self, Self::Error> {
        match marker {
            '?' => Ok(Cardinality::ZeroOrOne),
            '1' => Ok(Cardinality::One),
            '*' => Ok(Cardinality::Collection),
            _ => Err(MarkerError {
                marker,
                category: "cardinality",
            }),
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::ZeroOrOne => write!(f, "zero or one"),
            Cardinality::One => write!(f, "one"),
            Cardinality::Collection => write!(f, "collection"),
        }
    }
}

/// A nominal reference to a model or enum.
///
/// An empty package means the reference targets the declaring package.
/// References are never resolved at this level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    package: String,
    name: String,
}

impl TypeRef {
    /// Create a reference to a type in the declaring package.
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            package: String::new(),
            name: name.into(),
        }
    }

    /// Create a reference to a type in another package.
    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Get the package of the referenced type, or `None` for a local reference.
    pub fn package(&self) -> Option<&str> {
        (!self.package.is_empty()).then_some(self.package.as_str())
    }

    /// Get the referenced type name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.package() {
            Some(package) => write!(f, "{}.{}", package, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A model member: `=1 id uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    #[serde(rename = "type")]
    type_ref: TypeRef,
    ownership: Ownership,
    cardinality: Cardinality,
    #[serde(default)]
    traits: Vec<Trait>,
}

impl Field {
    /// Create a new Field.
    pub fn new(
        name: impl Into<String>,
        type_ref: TypeRef,
        ownership: Ownership,
        cardinality: Cardinality,
        traits: Vec<Trait>,
    ) -> Self {
        Self {
            name: name.into(),
            type_ref,
            ownership,
            cardinality,
            traits,
        }
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the field's type reference.
    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    /// Get the field's ownership.
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Get the field's cardinality.
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Borrow the traits attached to this field, in source order.
    pub fn traits(&self) -> &[Trait] {
        &self.traits
    }

    /// Returns `true` if a trait with the given name is attached.
    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.iter().any(|t| t.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {} {}",
            self.ownership.marker(),
            self.cardinality.marker(),
            self.name,
            self.type_ref
        )
    }
}

/// A named model with traits and ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    name: String,
    #[serde(default)]
    traits: Vec<Trait>,
    #[serde(default)]
    fields: Vec<Field>,
}

impl Model {
    /// Create a new Model.
    pub fn new(name: impl Into<String>, traits: Vec<Trait>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            traits,
            fields,
        }
    }

    /// Get the model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the traits attached to this model, in source order.
    pub fn traits(&self) -> &[Trait] {
        &self.traits
    }

    /// Borrow the fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Find a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns `true` if a trait with the given name is attached.
    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.iter().any(|t| t.name() == name)
    }
}
