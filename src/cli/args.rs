//! CLI argument definitions.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// enrolld - a strict, concurrency-safe course enrollment engine
#[derive(Debug, Parser)]
#[command(name = "enrolld", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the enrollment API over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: SocketAddr,

        /// JSON catalog file supplied by the catalog collaborator
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Validate a catalog file and print a summary
    Check {
        /// JSON catalog file to validate
        #[arg(long)]
        catalog: PathBuf,
    },
}
