//! Configuration types for reading and writing Ginco schemas.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! configuration file. Every section and key is optional.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining input and output settings.
//! - [`InputConfig`] - Which [`InputFormat`] source files are read as.
//! - [`OutputConfig`] - Which [`OutputFormat`] parsed schemas are written as.
//!
//! # Example
//!
//! ```
//! # use ginco::config::{AppConfig, InputFormat, OutputFormat};
//! let config = AppConfig::default();
//! assert_eq!(config.input().format(), InputFormat::Auto);
//! assert_eq!(config.output().format(), OutputFormat::Yaml);
//! assert!(!config.output().pretty());
//! ```

use std::{fmt, path::Path, str::FromStr};

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Input configuration section.
    #[serde(default)]
    input: InputConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(input: InputConfig, output: OutputConfig) -> Self {
        Self { input, output }
    }

    /// Returns the input configuration.
    pub fn input(&self) -> &InputConfig {
        &self.input
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns a copy with the input format replaced.
    pub fn with_input_format(mut self, format: InputFormat) -> Self {
        self.input.format = format;
        self
    }

    /// Returns a copy with the output format replaced.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }
}

/// How source files are read.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    format: InputFormat,
}

impl InputConfig {
    pub fn new(format: InputFormat) -> Self {
        Self { format }
    }

    /// Returns the configured [`InputFormat`].
    pub fn format(&self) -> InputFormat {
        self.format
    }
}

/// How parsed schemas are written.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    format: OutputFormat,

    /// Indent JSON output. YAML is always block-formatted.
    #[serde(default)]
    pretty: bool,
}

impl OutputConfig {
    pub fn new(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }

    /// Returns the configured [`OutputFormat`].
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns `true` if JSON output should be indented.
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

/// Source format of a schema file.
///
/// - `Auto` - Choose by file extension: `.yaml`/`.yml` are YAML, anything else is the DSL
/// - `Dsl` - The Ginco modeling language
/// - `Yaml` - A YAML document shaped like the schema tree
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    #[default]
    Auto,
    Dsl,
    Yaml,
}

impl InputFormat {
    /// Resolve `Auto` against the extension of `path`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ginco::config::InputFormat;
    /// # use std::path::Path;
    /// assert_eq!(InputFormat::Auto.resolve(Path::new("shop.yml")), InputFormat::Yaml);
    /// assert_eq!(InputFormat::Auto.resolve(Path::new("shop.ginco")), InputFormat::Dsl);
    /// assert_eq!(InputFormat::Dsl.resolve(Path::new("shop.yaml")), InputFormat::Dsl);
    /// ```
    pub fn resolve(self, path: &Path) -> Self {
        match self {
            Self::Auto => match path.extension().and_then(|ext| ext.to_str()) {
                Some("yaml" | "yml") => Self::Yaml,
                _ => Self::Dsl,
            },
            format => format,
        }
    }
}

impl FromStr for InputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "dsl" => Ok(Self::Dsl),
            "yaml" => Ok(Self::Yaml),
            _ => Err("Unsupported input format"),
        }
    }
}

impl From<InputFormat> for &'static str {
    fn from(val: InputFormat) -> Self {
        match val {
            InputFormat::Auto => "auto",
            InputFormat::Dsl => "dsl",
            InputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

/// Serialization format for parsed schemas.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err("Unsupported output format"),
        }
    }
}

impl From<OutputFormat> for &'static str {
    fn from(val: OutputFormat) -> Self {
        match val {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("dsl".parse::<InputFormat>(), Ok(InputFormat::Dsl));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<InputFormat>().is_err());
        assert!("toml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_display_matches_from_str() {
        for format in [InputFormat::Auto, InputFormat::Dsl, InputFormat::Yaml] {
            assert_eq!(format.to_string().parse::<InputFormat>(), Ok(format));
        }
        for format in [OutputFormat::Yaml, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
        }
    }

    #[test]
    fn test_resolve_auto() {
        assert_eq!(
            InputFormat::Auto.resolve(Path::new("a/b.yaml")),
            InputFormat::Yaml
        );
        assert_eq!(InputFormat::Auto.resolve(Path::new("noext")), InputFormat::Dsl);
        assert_eq!(
            InputFormat::Yaml.resolve(Path::new("schema.ginco")),
            InputFormat::Yaml
        );
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_input_format(InputFormat::Yaml)
            .with_output_format(OutputFormat::Json);

        assert_eq!(config.input().format(), InputFormat::Yaml);
        assert_eq!(config.output().format(), OutputFormat::Json);
    }
}
