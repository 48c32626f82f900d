//! # Rentool Terminal
//!
//! Process entry point: initialize logging, load the catalog config,
//! build the rental desk, and run one interview over stdio.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Terminal Application                         │
//! │                                                                     │
//! │  catalog.json ──► CatalogConfig ──► RentalDesk ──► interface::run   │
//! │                                                         │           │
//! │                         stdin ──► four answers ──► receipt/stdout   │
//! │                                                    errors/stderr    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod interface;

use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rentool_core::calendar::RentalCalendar;
use rentool_core::catalog::ToolCatalog;
use rentool_core::desk::RentalDesk;

use crate::config::CatalogConfig;

fn main() -> ExitCode {
    // Initialize tracing; logs go to stderr so the interview and receipt
    // on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RENTOOL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let config = match CatalogConfig::load() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "failed to load catalog configuration");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        tools = config.tools.len(),
        tool_types = config.tool_types.len(),
        holidays = config.holidays.len(),
        "catalog loaded"
    );

    // Build the desk over the immutable catalog and calendar
    let desk = RentalDesk::new(
        ToolCatalog::new(config.tools, config.tool_types),
        RentalCalendar::new(config.holidays),
    );

    // Run one interview over the real stdio streams
    let stdin = io::stdin();
    let result = interface::run(
        &desk,
        &mut stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    );

    if let Err(err) = result {
        eprintln!(
            "An unexpected error occurred. Please make note of the exception below and try again. {err}"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
