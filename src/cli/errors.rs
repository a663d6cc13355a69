//! CLI error types.

use thiserror::Error;

use crate::catalog::CatalogError;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the terminal.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog file rejected
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Server or runtime I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
