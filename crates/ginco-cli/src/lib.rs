//! CLI logic for the Ginco schema tool.
//!
//! This module contains the core CLI logic: load the configuration, read the
//! schema in its input format, and write it back out in the output format.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::info;

use ginco::{GincoError, SchemaBuilder};

/// Run the Ginco CLI application
///
/// This function reads the input file, parses it in the resolved input
/// format, and writes the serialized schema to the output file or stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `GincoError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Serialization errors
pub fn run(args: &Args) -> Result<(), GincoError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing schema"
    );

    let app_config = config::load_config(args)?;

    let source = fs::read_to_string(&args.input)?;
    let input_format = app_config.input().format().resolve(Path::new(&args.input));

    let builder = SchemaBuilder::new(app_config);
    let file = builder.load(&source, input_format)?;
    let text = builder.serialize(&file)?;

    match &args.output {
        Some(path) => {
            fs::write(path, text)?;
            info!(output_file = path; "Schema written successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
