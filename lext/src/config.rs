//! Configuration module for the lext CLI.
//!
//! This module handles loading `lext.toml` and turning its `[lexer]` section
//! into a [`LexerConfig`].

use dirs::{config_dir, home_dir};
use lexc_lex::{unicode, KeywordSet, LexerConfig, DEFAULT_MAX_STRING_LEN};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{LextError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lext.toml";

/// Source file read when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "test.txt";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Source file to tokenize when none is given.
    #[serde(default = "default_input")]
    pub input: String,

    /// Scanner settings.
    #[serde(default)]
    pub lexer: LexerSection,

    /// Rendering settings.
    #[serde(default)]
    pub output: OutputSection,
}

/// The `[lexer]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerSection {
    /// Replacement keyword list. The built-in set is used when absent.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,

    /// Maximum decoded string literal length in characters.
    #[serde(default = "default_max_string_length")]
    pub max_string_length: usize,
}

/// The `[output]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputSection {
    /// How tokens are printed.
    #[serde(default)]
    pub format: OutputFormat,

    /// Drop comment tokens from the output.
    #[serde(default)]
    pub skip_comments: bool,
}

fn default_input() -> String {
    DEFAULT_INPUT.to_string()
}

fn default_max_string_length() -> usize {
    DEFAULT_MAX_STRING_LEN
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            lexer: LexerSection::default(),
            output: OutputSection::default(),
        }
    }
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            keywords: None,
            max_string_length: default_max_string_length(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/lext/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LextError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| LextError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Builds the scanner configuration from the `[lexer]` table.
    pub fn lexer_config(&self) -> Result<LexerConfig> {
        let keywords = match &self.lexer.keywords {
            Some(words) => {
                if let Some(bad) = words.iter().find(|w| !unicode::is_identifier(w)) {
                    return Err(LextError::Config(format!(
                        "Keyword {:?} can never match: keywords must start with a letter \
                         and contain only letters, digits and underscores",
                        bad
                    )));
                }
                KeywordSet::new(words.iter().cloned())
            },
            None => KeywordSet::default(),
        };

        Ok(LexerConfig {
            keywords,
            max_string_len: self.lexer.max_string_length,
        })
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("lext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
