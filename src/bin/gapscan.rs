// src/bin/gapscan.rs
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gapscan_core::cli::{handlers, Cli};
use gapscan_core::exit::GapScanExit;

fn main() -> GapScanExit {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match handlers::run(&cli) {
        Ok(exit) => exit,
        Err(e) => {
            eprintln!("Error: {e:#}");
            GapScanExit::Fail
        }
    }
}
