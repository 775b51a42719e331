//! `catlog levels`: names accepted by `--level` and `--threshold`.

use crate::fmt::{Color, colorize};
use crate::level::Level;
use std::process::ExitCode;

#[must_use]
pub fn cmd_levels(colors: bool) -> ExitCode {
    for level in Level::all() {
        let name = format!("{:<8}", level.name());
        let name = if colors {
            colorize(&name, Color::for_level(level))
        } else {
            name
        };
        println!("{name} {}", level.rank());
    }
    println!("{:<8} never admitted", Level::OFF.name());
    ExitCode::SUCCESS
}
