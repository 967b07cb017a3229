//! Error types for the CLI.

use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use girth_core::error::GeometryError;

/// Errors surfaced by [`crate::run`].
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(girth::io))]
    Io(#[from] io::Error),

    #[error(transparent)]
    #[diagnostic(code(girth::geometry))]
    Geometry(#[from] GeometryError),

    #[error("Missing file: {}", .0.display())]
    #[diagnostic(code(girth::missing_file))]
    MissingFile(PathBuf),

    #[error("Failed to parse {}: {message}", .path.display())]
    #[diagnostic(
        code(girth::parse),
        help("check the TOML syntax and the field names of each entry")
    )]
    Parse { path: PathBuf, message: String },

    #[error("Shape #{index} in the scene file is invalid")]
    #[diagnostic(
        code(girth::invalid_shape),
        help("dimensions must be zero or positive")
    )]
    InvalidShape {
        index: usize,
        #[source]
        source: GeometryError,
    },
}
