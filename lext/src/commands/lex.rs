//! Lex command implementation.
//!
//! Scans one source file and prints its tokens in source order.

use std::io::Write;
use std::path::PathBuf;

use lexc_lex::Token;
use serde::Serialize;

use crate::commands::common::{resolve_input, tokenize_file, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Source file; falls back to the configured input.
    pub input: Option<PathBuf>,
    /// Output format; falls back to the configured format.
    pub format: Option<OutputFormat>,
    /// Drop comment tokens from the output.
    pub no_comments: bool,
}

/// A token as written by `--format json`.
#[derive(Debug, Serialize)]
struct TokenRecord<'t> {
    category: &'static str,
    text: &'t str,
    line: u32,
    column: u32,
}

impl<'t> From<&'t Token> for TokenRecord<'t> {
    fn from(token: &'t Token) -> Self {
        Self {
            category: token.category().name(),
            text: token.text(),
            line: token.span().line,
            column: token.span().column,
        }
    }
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl LexCommand {
    fn format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.config.output.format)
    }

    fn skip_comments(&self) -> bool {
        self.args.no_comments || self.config.output.skip_comments
    }
}

impl Command for LexCommand {
    type Args = LexArgs;

    fn new(args: LexArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let path = resolve_input(self.args.input.as_deref(), &self.config);
        let tokens = tokenize_file(&path, &self.config)?;

        let skip_comments = self.skip_comments();
        let visible: Vec<&Token> = tokens
            .iter()
            .filter(|t| !(skip_comments && t.category().is_comment()))
            .collect();

        write_tokens(out, &visible, self.format())
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Renders tokens in the requested format.
pub fn write_tokens(out: &mut dyn Write, tokens: &[&Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(|t| TokenRecord::from(*t)).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
