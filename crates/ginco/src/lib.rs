//! Ginco - A modeling language for describing packages of models and enums.
//!
//! Reads schemas written in the Ginco DSL or as YAML documents of the same
//! shape, and writes them back out as YAML or JSON for code generators.

pub mod config;
pub mod validate;

mod error;

pub use ginco_core::schema;
pub use ginco_parser::error as diagnostics;

pub use error::GincoError;

use log::{debug, info, trace};

use config::{AppConfig, InputFormat, OutputFormat};
use schema::File;

/// Builder for loading and serializing Ginco schemas.
///
/// # Examples
///
/// ```rust
/// use ginco::{SchemaBuilder, config::AppConfig};
///
/// let source = "package shop { model Order { fields { =1 id uuid } } }";
///
/// let builder = SchemaBuilder::new(AppConfig::default());
///
/// // Parse source to the schema tree
/// let file = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Write the schema tree as YAML (the default output format)
/// let yaml = builder.serialize(&file)
///     .expect("Failed to serialize");
/// assert!(yaml.contains("name: Order"));
/// ```
#[derive(Default)]
pub struct SchemaBuilder {
    config: AppConfig,
}

impl SchemaBuilder {
    /// Create a new schema builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse Ginco DSL source into a schema.
    ///
    /// # Errors
    ///
    /// Returns [`GincoError::Parse`] carrying the diagnostic and the source.
    pub fn parse(&self, source: &str) -> Result<File, GincoError> {
        info!("Parsing schema");

        let file = ginco_parser::parse(source)
            .map_err(|err| GincoError::new_parse_error(err, source))?;

        debug!(packages = file.packages().len(); "Schema parsed successfully");
        trace!(file:?; "Parsed schema");

        Ok(file)
    }

    /// Read a YAML document shaped like the schema tree.
    ///
    /// Omitted collections default to empty.
    ///
    /// # Errors
    ///
    /// Returns [`GincoError::Yaml`] for malformed documents and
    /// [`GincoError::Validation`] for documents the DSL could not express,
    /// such as a repeated enum literal or an empty package name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ginco::SchemaBuilder;
    ///
    /// let yaml = "packages:\n  - name: shop\n    enums:\n      - name: Status\n        literals: [Open, Closed]\n";
    /// let file = SchemaBuilder::default().parse_yaml(yaml).expect("Failed to read");
    /// assert_eq!(file.packages()[0].enums()[0].literals().len(), 2);
    /// ```
    pub fn parse_yaml(&self, source: &str) -> Result<File, GincoError> {
        info!("Reading YAML schema");

        let file: File = serde_yaml::from_str(source)?;
        validate::validate_file(&file)?;

        debug!(packages = file.packages().len(); "YAML schema read successfully");
        Ok(file)
    }

    /// Load `source` in the given format.
    ///
    /// [`InputFormat::Auto`] has no path to look at here and is read as the
    /// DSL; callers with a file name should [`InputFormat::resolve`] first.
    pub fn load(&self, source: &str, format: InputFormat) -> Result<File, GincoError> {
        debug!(format:%; "Loading schema");
        match format {
            InputFormat::Auto | InputFormat::Dsl => self.parse(source),
            InputFormat::Yaml => self.parse_yaml(source),
        }
    }

    /// Serialize a schema in the configured output format.
    ///
    /// # Errors
    ///
    /// Returns [`GincoError::Yaml`] or [`GincoError::Json`] if serialization
    /// fails.
    pub fn serialize(&self, file: &File) -> Result<String, GincoError> {
        let output = self.config.output();
        info!(format:% = output.format(), pretty = output.pretty(); "Serializing schema");

        let text = match output.format() {
            OutputFormat::Yaml => serde_yaml::to_string(file)?,
            OutputFormat::Json if output.pretty() => serde_json::to_string_pretty(file)?,
            OutputFormat::Json => serde_json::to_string(file)?,
        };

        debug!(bytes = text.len(); "Schema serialized successfully");
        Ok(text)
    }
}
