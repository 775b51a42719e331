//! `catlog` binary.
//!
//! Usage:
//!   catlog emit <category> <id> [args...]   Log one message
//!   catlog check <catalog.toml>             Validate a catalog
//!   catlog levels                           List levels

use catlog::Reporter;
use catlog::cli::{Cli, Command, cmd_check, cmd_emit, cmd_levels};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let reporter = Reporter::default();

    match cli.command {
        Command::Emit(args) => cmd_emit(&args, &reporter),
        Command::Check { catalog } => cmd_check(&catalog, &reporter),
        Command::Levels => cmd_levels(std::io::stdout().is_terminal()),
    }
}
