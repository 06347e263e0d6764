//! Common types and utilities for lext commands.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use lexc_lex::{Lexer, Token};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{LextError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `[Category: X, Content: Y]` line per token.
    #[default]
    Text,
    /// A JSON array of token records.
    Json,
}

// ============================================================================
// Source Loading
// ============================================================================

/// Picks the source path: the command line wins over the configuration.
pub fn resolve_input(input: Option<&Path>, config: &Config) -> PathBuf {
    input.map_or_else(|| PathBuf::from(&config.input), Path::to_path_buf)
}

/// Reads the whole source file into memory.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(LextError::Validation(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(LextError::Validation(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }

    Ok(std::fs::read_to_string(path)?)
}

/// Loads `path` and scans it with the configured lexer.
pub fn tokenize_file(path: &Path, config: &Config) -> Result<Vec<Token>> {
    let source = read_source(path)?;
    let lexer_config = config.lexer_config()?;

    tracing::info!(path = %path.display(), bytes = source.len(), "tokenizing");
    let tokens = Lexer::new(&source, &lexer_config).tokenize()?;
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_input_prefers_argument() {
        let config = Config::default();
        assert_eq!(
            resolve_input(Some(Path::new("a.c")), &config),
            PathBuf::from("a.c")
        );
        assert_eq!(resolve_input(None, &config), PathBuf::from("test.txt"));
    }

    #[test]
    fn test_read_source_missing_file() {
        let result = read_source(Path::new("/nonexistent/source.c"));
        assert!(matches!(result, Err(LextError::Validation(_))));
    }

    #[test]
    fn test_read_source_directory() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            read_source(dir.path()),
            Err(LextError::Validation(_))
        ));
    }

    #[test]
    fn test_tokenize_file_uses_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("src.txt");
        std::fs::write(&path, "let x").unwrap();

        let mut config = Config::default();
        config.lexer.keywords = Some(vec!["let".to_string()]);

        let tokens = tokenize_file(&path, &config).unwrap();
        assert!(tokens[0].is(lexc_lex::Category::Keyword, "let"));
    }

    #[test]
    fn test_tokenize_file_reports_lexical_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "char c = 'ab';").unwrap();

        let result = tokenize_file(&path, &Config::default());
        assert!(matches!(result, Err(LextError::Lexical(_))));
    }
}
