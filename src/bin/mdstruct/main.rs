//! mdstruct CLI - Interactive Markdown field table to Go struct generator
//!
//! Reads tables from stdin and prints Go structs to stdout. Logs go to
//! stderr so the generated code can be piped or copied as is.

mod config;

use std::io;
use std::process;

use mdstruct::{Session, SessionEnd};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use config::Config;

/// Exit status when a table is rejected (column count mismatch)
const EXIT_TABLE_REJECTED: i32 = 1;
/// Exit status for console or configuration failures
const EXIT_FAILURE: i32 = 2;

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(EXIT_FAILURE);
        }
    };

    // Initialize logging on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config.options);

    match session.run() {
        Ok(end) => {
            if end == SessionEnd::EndOfInput {
                debug!("input closed");
            }
        }
        Err(err) if err.is_table_error() => {
            // The mismatch message has already been printed on stdout
            process::exit(EXIT_TABLE_REJECTED);
        }
        Err(err) => {
            error!(%err, "session failed");
            process::exit(EXIT_FAILURE);
        }
    }
}
