//! CLI command dispatch.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::catalog::InMemoryCatalog;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::txn::Coordinator;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments, initialise logging, and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Serve { listen, catalog } => serve(listen, &catalog),
        Command::Check { catalog } => check(&catalog),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn serve(listen: SocketAddr, catalog_path: &Path) -> CliResult<()> {
    let catalog = InMemoryCatalog::load_file(catalog_path)?;
    tracing::info!(courses = catalog.len(), "catalog loaded");

    let coordinator = Arc::new(Coordinator::new(Arc::new(catalog)));
    let server = HttpServer::new(coordinator, HttpServerConfig { listen });

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn check(catalog_path: &Path) -> CliResult<()> {
    let catalog = InMemoryCatalog::load_file(catalog_path)?;
    println!("catalog ok: {} courses", catalog.len());
    Ok(())
}
