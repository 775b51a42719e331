//! Command-line interface for emitting messages through a catalog and checking
//! catalog files before they ship.

pub mod commands;
pub mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// catlog - Emit catalog-based log messages from the command line.
#[derive(Parser)]
#[command(name = "catlog", version, about = "Emit catalog-based log messages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log one message.
    Emit(EmitArgs),
    /// Validate a catalog file and list its messages.
    Check {
        /// Catalog TOML file
        catalog: PathBuf,
    },
    /// List the built-in levels.
    Levels,
}

#[derive(clap::Args)]
pub struct EmitArgs {
    /// Category name
    pub category: String,
    /// Message id, or a format string when the id is not in the catalog
    pub id: String,
    /// Positional arguments; integers, floats and true/false keep their type
    pub args: Vec<String>,
    /// Level; defaults to the catalog level of the id, then INFO
    #[arg(short, long)]
    pub level: Option<String>,
    /// Catalog TOML file
    #[arg(short, long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
    /// Log the id as literal text, without catalog lookup or substitution
    #[arg(long)]
    pub text: bool,
    /// Source tag
    #[arg(long)]
    pub source: Option<String>,
    /// Suppress every emission after the first
    #[arg(long)]
    pub once: bool,
    /// Emit the message this many times
    #[arg(long, default_value_t = 1, value_name = "N")]
    pub repeat: usize,
    /// Lowest level the console shows
    #[arg(long, default_value = "debug2", value_name = "LEVEL")]
    pub threshold: String,
    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
    /// Also append to a JSON-lines file
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
    /// Also write plain-text logs below this directory
    #[arg(long, value_name = "DIR")]
    pub file: Option<String>,
    /// Print the built message as JSON instead of logging it
    #[arg(long)]
    pub dry_run: bool,
}

pub use commands::{cmd_check, cmd_emit, cmd_levels};
pub use util::{load_catalog, parse_arg};
