//! CLI module for enrolld
//!
//! Provides the command-line interface:
//! - serve: load a catalog and serve the enrollment API
//! - check: validate a catalog file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
