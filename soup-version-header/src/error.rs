//! Error types for header generation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level generator error.
#[derive(Error, Debug)]
pub enum Error {
    /// The version argument is not `MAJOR.MINOR.MICRO`.
    #[error(transparent)]
    Version(#[from] VersionError),

    /// The template file could not be read.
    #[error("failed to read template {}: {source}", .path.display())]
    ReadTemplate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The template text is malformed or names an unknown field.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The rendered header could not be written.
    #[error("failed to write output {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A header style file could not be read or parsed.
    #[error("invalid header style {}: {message}", .path.display())]
    Style { path: PathBuf, message: String },
}

/// Errors while parsing a `MAJOR.MINOR.MICRO` string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("version {input:?} has {found} components, expected 3 (MAJOR.MINOR.MICRO)")]
    Arity { input: String, found: usize },

    #[error("version {input:?}: {component} component {value:?} is not an unsigned integer")]
    Component {
        input: String,
        component: &'static str,
        value: String,
    },
}

/// Errors while substituting fields into a template.
///
/// Positions are 1-based and count characters, not bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown placeholder {{{name}}} at line {line}, column {column}")]
    UnknownPlaceholder {
        name: String,
        line: usize,
        column: usize,
    },

    #[error("unmatched '{brace}' at line {line}, column {column} (use '{brace}{brace}' for a literal brace)")]
    UnbalancedBrace {
        brace: char,
        line: usize,
        column: usize,
    },

    #[error("unterminated placeholder starting at line {line}, column {column}")]
    Unterminated { line: usize, column: usize },
}
