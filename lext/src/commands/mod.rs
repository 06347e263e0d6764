//! Command modules for the lext CLI.
//!
//! Each subcommand is implemented in its own file and implements the
//! [`traits::Command`] trait.

pub mod common;
pub mod traits;

pub mod lex;
pub mod stats;

// Re-export command types
pub use lex::{LexArgs, LexCommand};
pub use stats::{StatsArgs, StatsCommand};
pub use traits::Command;
