//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::error::{Result, WordcheckError};

/// A tokenizer that splits text on matches of a delimiter pattern.
///
/// Text between delimiter matches becomes tokens; empty gaps are dropped.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    delimiter: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer splitting on the given delimiter pattern.
    ///
    /// Patterns that can match the empty string are rejected, since they
    /// would split between every character.
    pub fn with_delimiter(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        if regex.is_match("") {
            return Err(WordcheckError::invalid_config(format!(
                "delimiter pattern {pattern:?} matches the empty string"
            )));
        }

        Ok(RegexTokenizer {
            delimiter: Arc::new(regex),
        })
    }

    /// Get the delimiter pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.delimiter.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.delimiter
            .split(text)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
