//! Error types for Ginco operations.
//!
//! This module provides the main error type [`GincoError`] which wraps
//! the error conditions that can occur while loading and writing schemas.

use std::io;

use thiserror::Error;

use ginco_parser::error::ParseError;

use crate::validate::ValidationError;

/// The main error type for Ginco operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the [`ParseError`] so
/// that the failing span can be rendered with its surrounding code.
#[derive(Debug, Error)]
pub enum GincoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid schema: {0}")]
    Validation(#[from] ValidationError),
}

impl GincoError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
