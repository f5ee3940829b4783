use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all pdeps operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PdepsError {
    /// The product_deps file could not be opened or read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The qualifier table has no row matching the requested qualifiers.
    #[error("Unable to find qualifiers {qualifiers} in product_deps file {source_name}")]
    #[diagnostic(help(
        "Add a row for these qualifiers to the qualifier table; `prof` and `debug` are ignored when matching"
    ))]
    QualifierNotFound {
        qualifiers: String,
        source_name: String,
    },

    /// The product_deps file is inconsistent (e.g. a qualifier column names
    /// a package that is missing from the product list).
    #[error("Malformed product_deps input at line {line}: {message}")]
    #[diagnostic(help("Check that every qualifier column is declared in the product list"))]
    MalformedInput { line: usize, message: String },

    /// Resolved dependencies could not be rendered.
    #[error("Failed to render output: {message}")]
    Output { message: String },

    /// Configuration file could not be read or parsed.
    #[error("Config error: {message}")]
    Config { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type PdepsResult<T> = miette::Result<T>;
