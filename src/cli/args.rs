//! CLI argument definitions using clap
//!
//! Keys are given in printable form: plain ASCII, `\\` for a backslash and
//! `\xNN` for any other byte. An omitted `--end` means the maximum key.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// keyspace - key-range arithmetic diagnostics
#[derive(Parser, Debug)]
#[command(name = "keyspace")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file; built-in defaults apply when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shortest split key inside a range
    Separator {
        #[arg(long)]
        begin: String,
        #[arg(long)]
        end: Option<String>,
    },

    /// Random keys strictly inside a range
    RandomKey {
        #[arg(long)]
        begin: String,
        #[arg(long)]
        end: Option<String>,
        /// Seed; overrides the configured seed
        #[arg(long)]
        seed: Option<u64>,
        /// Number of keys to draw
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Remove ranges from a range
    Subtract {
        #[arg(long)]
        begin: String,
        #[arg(long)]
        end: Option<String>,
        /// Range to remove; repeatable
        #[arg(long, num_args = 2, value_names = ["BEGIN", "END"])]
        minus: Vec<String>,
    },

    /// Project a range into a prefix namespace
    Project {
        #[arg(long)]
        begin: String,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        prefix: String,
    },

    /// Map a prefix-relative range back to the global key space
    Unproject {
        #[arg(long)]
        begin: String,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        prefix: String,
    },

    /// Build and describe a key selector
    Selector {
        #[arg(long)]
        key: String,
        #[arg(long)]
        or_equal: bool,
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        offset: i32,
        /// Store the key without applying the size limit
        #[arg(long)]
        unlimited: bool,
    },

    /// List storage engines, their codes and aliases
    Engines,

    /// Resolve a storage engine name or alias
    Engine {
        name: String,
    },

    /// Name of a persisted storage engine code
    EngineCode {
        code: u8,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
