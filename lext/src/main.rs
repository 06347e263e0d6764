//! Lext CLI - command-line front end for the lexc lexical analyzer.
//!
//! This is the main entry point for the lext CLI application. It parses
//! arguments with clap, sets up logging, loads the configuration and
//! dispatches to the selected command. A failed scan is reported on stderr
//! and ends the process with status 1.

mod commands;
mod config;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{Command, LexArgs, LexCommand, StatsArgs, StatsCommand};
use config::Config;
use error::{LextError, Result};

/// Lext - tokenize C-family source files
#[derive(Parser, Debug)]
#[command(name = "lext")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize C-family source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LEXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LEXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lext CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every token of a source file
    ///
    /// Tokens are printed in source order, one `[Category: X, Content: Y]`
    /// line each, or as a JSON array with `--format json`.
    Lex(LexCommandArgs),

    /// Count tokens per category
    Stats(StatsCommandArgs),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommandArgs {
    /// Source file (default: from config, then `test.txt`)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Leave comment tokens out of the output
    #[arg(long)]
    no_comments: bool,
}

/// Arguments for the stats subcommand.
#[derive(Parser, Debug)]
struct StatsCommandArgs {
    /// Source file (default: from config, then `test.txt`)
    input: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initializes logging, loads configuration and executes the command.
fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;
    let config = load_config(cli.config.as_deref())?;
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that token output on stdout stays machine-readable.
/// `RUST_LOG` overrides the level picked from `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LextError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command against stdout.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => {
            let lex_args = LexArgs {
                input: args.input,
                format: args.format,
                no_comments: args.no_comments,
            };
            execute::<LexCommand>(lex_args, config)
        },
        Commands::Stats(args) => execute::<StatsCommand>(StatsArgs { input: args.input }, config),
    }
}

fn execute<C: Command>(args: C::Args, config: Config) -> Result<()> {
    tracing::debug!(command = C::name(), "executing");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    C::new(args, config).execute(&mut out)?;
    out.flush()?;
    Ok(())
}
