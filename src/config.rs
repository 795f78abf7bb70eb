//! Configuration for check sessions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::{Result, WordcheckError};

/// Default number of dictionary buckets.
///
/// Prime, and about a third of a typical word list.
pub const DEFAULT_TABLE_SIZE: usize = 1349;

/// Configuration for a [`CheckSession`](crate::spelling::session::CheckSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Number of hash buckets in the dictionary.
    pub table_size: usize,

    /// Delimiter pattern used to split sources into words.
    /// If None, tokens are separated by runs of whitespace.
    pub delimiter: Option<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            table_size: DEFAULT_TABLE_SIZE,
            delimiter: None,
        }
    }
}

impl CheckerConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| WordcheckError::source_not_found(path, e))?;
        let config: CheckerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can be used to build a session.
    pub fn validate(&self) -> Result<()> {
        if self.table_size == 0 {
            return Err(WordcheckError::invalid_config(
                "table_size must be greater than zero",
            ));
        }
        if let Some(pattern) = &self.delimiter {
            RegexTokenizer::with_delimiter(pattern)?;
        }
        Ok(())
    }

    /// Build the tokenizer described by this configuration.
    pub fn tokenizer(&self) -> Result<Box<dyn Tokenizer>> {
        match &self.delimiter {
            Some(pattern) => Ok(Box::new(RegexTokenizer::with_delimiter(pattern)?)),
            None => Ok(Box::new(WhitespaceTokenizer::new())),
        }
    }
}
