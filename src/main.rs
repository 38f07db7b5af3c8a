//! AddressBloc - Main entry point
//!
//! Loads configuration, optionally seeds the address book from a CSV file and
//! runs the interactive menu on stdin/stdout.

use address_bloc::{Config, ContactStore, MenuController};
use anyhow::{Context, Result};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with the menu on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut store = ContactStore::new();

    if let Some(path) = &config.import_file {
        match store.import_from_csv(path) {
            Ok(count) => info!("Imported {} entries from {}", count, path.display()),
            Err(e) => {
                error!("Startup import failed: {}", e);
                return Err(e).context("failed to import startup CSV");
            }
        }
    }

    info!("Starting AddressBloc with {} entries", store.len());

    let stdin = io::stdin();
    let mut menu = MenuController::new(store, stdin.lock(), io::stdout())
        .with_clear_screen(config.clear_screen);
    menu.run()?;

    info!("AddressBloc shutdown complete");
    Ok(())
}
