//! Root schema structures.

use serde::{Deserialize, Serialize};

use crate::schema::{enumeration::Enum, model::Model};

/// A parsed schema file: an ordered list of packages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    #[serde(default)]
    packages: Vec<Package>,
}

impl File {
    /// Create a new File from its packages.
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    /// Borrow the packages in declaration order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Find a package by name.
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|pkg| pkg.name == name)
    }
}

/// A named package holding models and enums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    name: String,
    #[serde(default)]
    models: Vec<Model>,
    #[serde(default)]
    enums: Vec<Enum>,
}

impl Package {
    /// Create a new Package.
    pub fn new(name: impl Into<String>, models: Vec<Model>, enums: Vec<Enum>) -> Self {
        Self {
            name: name.into(),
            models,
            enums,
        }
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the models in declaration order.
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Borrow the enums in declaration order.
    pub fn enums(&self) -> &[Enum] {
        &self.enums
    }

    /// Find a model by name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.name() == name)
    }

    /// Find an enum by name.
    pub fn enumeration(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|enumeration| enumeration.name() == name)
    }
}
