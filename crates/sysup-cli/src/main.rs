//! sysup CLI
//!
//! Detects the host's package manager (apt or dnf), refreshes the package
//! index and applies pending upgrades

use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sysup_exec::local::LocalExecutor;

mod app;

/// Refresh the package index and apply pending upgrades
#[derive(Parser, Debug)]
#[command(name = "sysup", version, about)]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let _args = Args::parse();

    // Log to stderr; stdout carries the status lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Package operations need root for the backend commands themselves
    if unsafe { libc::geteuid() } != 0 {
        eprintln!("sysup must be run as root");
        std::process::exit(1);
    }

    let backend = match sysup_pkg::detect() {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    info!(%backend, "detected package manager");

    let manager = sysup_pkg::manager_for(backend, Arc::new(LocalExecutor::new()));

    if let Err(e) = app::run(manager.as_ref()).await {
        eprintln!("{e}");
        std::process::exit(1);
    }

    Ok(())
}
