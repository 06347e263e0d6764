//! Command trait for the lext CLI.
//!
//! Every subcommand implements [`Command`], which keeps construction and
//! execution uniform and lets tests run a command against an in-memory
//! writer instead of stdout.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all lext commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance from its arguments and the loaded
    /// configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<()>;

    /// The command name, as used in log output.
    fn name() -> &'static str;
}
