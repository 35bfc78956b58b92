//! # Kiosk Console Entry Point
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Application Startup                         │
//! │                                                                 │
//! │  1. Initialize Logging ──────────────────────────────────────►  │
//! │     • tracing-subscriber with env filter                        │
//! │     • Default: INFO, can be overridden with RUST_LOG            │
//! │                                                                 │
//! │  2. Resolve Catalog Path ────────────────────────────────────►  │
//! │     • First CLI argument, or data/products.txt                  │
//! │                                                                 │
//! │  3. Load Catalog ────────────────────────────────────────────►  │
//! │     • Missing file is fatal; bad lines are logged and skipped   │
//! │                                                                 │
//! │  4. Run the Menu Loop ───────────────────────────────────────►  │
//! │     • Shell over stdin/stdout until the operator quits          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod error;
mod shell;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use catalog::Catalog;
use error::AppResult;
use shell::Shell;

/// Catalog file used when none is given on the command line.
const DEFAULT_CATALOG_PATH: &str = "data/products.txt";

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "kiosk-console exiting with error");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

    let catalog = Catalog::load(&path)?;
    if catalog.is_empty() {
        info!("no products loaded; catalog lookups will find nothing");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), catalog);
    shell.run()?;

    info!(queued = shell.queued_orders(), "session ended");
    Ok(())
}

/// Initializes tracing with an env filter (default INFO, overridable with
/// `RUST_LOG`). Logs go to stderr so they never interleave with the menu.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}
