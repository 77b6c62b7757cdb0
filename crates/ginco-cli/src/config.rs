//! Configuration loading for the CLI
//!
//! The effective configuration is built in two steps: a TOML file is located
//! and read (explicit path, local directory, system directory, or built-in
//! defaults), then the `--input-format`/`--output-format` flags are laid on
//! top of it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use ginco::{GincoError, config::AppConfig};

use crate::Args;

/// Configuration file looked up in the working directory
const LOCAL_CONFIG: &str = "ginco/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),
}

impl From<ConfigError> for GincoError {
    fn from(err: ConfigError) -> Self {
        GincoError::Io(std::io::Error::other(err.to_string()))
    }
}

/// Where the configuration file comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`; must exist
    Explicit(PathBuf),
    /// `ginco/config.toml` under the working directory
    Local(PathBuf),
    /// The platform configuration directory
    System(PathBuf),
    /// No file; built-in defaults
    Default,
}

impl ConfigSource {
    /// The file to read, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Local(path) | Self::System(path) => Some(path),
            Self::Default => None,
        }
    }
}

/// Decide which configuration file to read
///
/// Search order:
/// 1. Explicit path if provided, whether or not it exists
/// 2. Local project directory (ginco/config.toml)
/// 3. Platform-specific config directory
/// 4. Defaults if none found
pub fn locate_config(explicit_path: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit_path {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    let local_config = Path::new(LOCAL_CONFIG);
    if local_config.exists() {
        return ConfigSource::Local(local_config.to_path_buf());
    }

    match ProjectDirs::from("com", "ginco", "ginco") {
        Some(proj_dirs) => {
            let system_config = proj_dirs.config_dir().join("config.toml");
            if system_config.exists() {
                return ConfigSource::System(system_config);
            }
            debug!(path = system_config.display().to_string(); "System configuration file not found");
        }
        None => debug!("Could not determine platform-specific config directory"),
    }

    ConfigSource::Default
}

/// Build the effective configuration for a run
///
/// # Errors
///
/// Returns error if:
/// - `--config` names a file that doesn't exist
/// - The located config file cannot be parsed
pub fn load_config(args: &Args) -> Result<AppConfig, GincoError> {
    let source = locate_config(args.config.as_deref().map(Path::new));

    let mut config = match source.path() {
        Some(path) => {
            info!(source:?; "Loading configuration");
            read_config_file(path)?
        }
        None => {
            debug!("No configuration file found, using default configuration");
            AppConfig::default()
        }
    };

    // Flags win over the file
    if let Some(format) = args.input_format {
        config = config.with_input_format(format);
    }
    if let Some(format) = args.output_format {
        config = config.with_output_format(format);
    }

    debug!(
        input_format:% = config.input().format(),
        output_format:% = config.output().format(),
        pretty = config.output().pretty();
        "Effective configuration"
    );
    Ok(config)
}

/// Read one TOML configuration file
fn read_config_file(path: &Path) -> Result<AppConfig, GincoError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        GincoError::from(ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use ginco::config::{InputFormat, OutputFormat};

    use super::*;

    fn args_with_config(path: &Path) -> Args {
        let mut args = Args::new("schema.ginco");
        args.config = Some(path.to_string_lossy().to_string());
        args
    }

    #[test]
    fn test_explicit_path_is_used_even_if_absent() {
        let path = Path::new("does/not/exist.toml");

        let source = locate_config(Some(path));

        assert_eq!(source, ConfigSource::Explicit(path.to_path_buf()));
        assert_eq!(source.path(), Some(path));
        assert_eq!(ConfigSource::Default.path(), None);
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[input]\nformat = \"yaml\"\n\n[output]\nformat = \"json\"\npretty = true\n",
        )
        .unwrap();

        let config = load_config(&args_with_config(&path)).unwrap();

        assert_eq!(config.input().format(), InputFormat::Yaml);
        assert_eq!(config.output().format(), OutputFormat::Json);
        assert!(config.output().pretty());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[input]\nformat = \"yaml\"\n\n[output]\nformat = \"json\"\npretty = true\n",
        )
        .unwrap();

        let mut args = args_with_config(&path);
        args.input_format = Some(InputFormat::Dsl);
        args.output_format = Some(OutputFormat::Yaml);

        let config = load_config(&args).unwrap();

        assert_eq!(config.input().format(), InputFormat::Dsl);
        assert_eq!(config.output().format(), OutputFormat::Yaml);
        // Untouched by flags
        assert!(config.output().pretty());
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\npretty = true\n").unwrap();

        let config = load_config(&args_with_config(&path)).unwrap();

        assert_eq!(config.input().format(), InputFormat::Auto);
        assert_eq!(config.output().format(), OutputFormat::Yaml);
        assert!(config.output().pretty());
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(&args_with_config(&path)).unwrap_err();

        assert!(err.to_string().contains("Missing configuration file"), "{err}");
        assert!(err.to_string().contains("absent.toml"), "{err}");
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\nformat = \"xml\"\n").unwrap();

        let err = load_config(&args_with_config(&path)).unwrap_err();

        assert!(err.to_string().contains("Failed to parse TOML"), "{err}");
        assert!(err.to_string().contains("config.toml"), "{err}");
    }
}
