//! Stats command implementation.
//!
//! Prints how many tokens of each category a source file contains.

use std::io::Write;
use std::path::PathBuf;

use lexc_lex::{Category, Token};

use crate::commands::common::{resolve_input, tokenize_file};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the stats command.
#[derive(Debug, Clone, Default)]
pub struct StatsArgs {
    /// Source file; falls back to the configured input.
    pub input: Option<PathBuf>,
}

/// Stats command handler.
pub struct StatsCommand {
    args: StatsArgs,
    config: Config,
}

/// Counts tokens per category, in `Category::ALL` order.
pub fn count_categories(tokens: &[Token]) -> [(Category, usize); 10] {
    Category::ALL.map(|category| {
        let count = tokens.iter().filter(|t| t.category() == category).count();
        (category, count)
    })
}

impl Command for StatsCommand {
    type Args = StatsArgs;

    fn new(args: StatsArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let path = resolve_input(self.args.input.as_deref(), &self.config);
        let tokens = tokenize_file(&path, &self.config)?;

        let counts = count_categories(&tokens);
        let width = Category::ALL.iter().map(|c| c.name().len()).max().unwrap_or(0);
        for (category, count) in counts {
            writeln!(out, "{:<width$}  {}", category.name(), count, width = width)?;
        }
        writeln!(out, "{:<width$}  {}", "Total", tokens.len(), width = width)?;
        Ok(())
    }

    fn name() -> &'static str {
        "stats"
    }
}
