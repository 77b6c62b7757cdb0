//! Command-line argument definitions for the Ginco CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input and output paths and formats,
//! configuration file selection, and logging verbosity.

use clap::Parser;

use ginco::config::{InputFormat, OutputFormat};

/// Command-line arguments for the Ginco schema tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input schema file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; the schema is printed to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Input format (auto, dsl, yaml); overrides the configuration file
    #[arg(long)]
    pub input_format: Option<InputFormat>,

    /// Output format (yaml, json); overrides the configuration file
    #[arg(long)]
    pub output_format: Option<OutputFormat>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Create arguments for `input` with every option at its default.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: None,
            config: None,
            input_format: None,
            output_format: None,
            log_level: "info".to_string(),
        }
    }
}
