//! One file per subcommand; each handler reports its own failures and returns
//! the exit code.

mod check;
mod emit;
mod levels;

pub use check::cmd_check;
pub use emit::cmd_emit;
pub use levels::cmd_levels;
