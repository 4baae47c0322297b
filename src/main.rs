//! keyspace CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. Failures are printed
//! as a JSON error object and the process exits non-zero.

use keyspace::cli;
use keyspace::observability::{log_event_with_fields, Event};

fn main() {
    if let Err(e) = cli::run() {
        log_event_with_fields(Event::CommandFailed, &[("code", e.code_str())]);
        if cli::write_error(e.code_str(), e.message()).is_err() {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }
}
