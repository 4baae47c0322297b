//! CLI module
//!
//! Diagnostic front end over the key-space operations:
//! - separator / random-key: split point selection
//! - subtract: range excision
//! - project / unproject: prefix namespaces
//! - selector: selector normalisation and description
//! - engines / engine / engine-code: storage engine registry

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_cli, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
