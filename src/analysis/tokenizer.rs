//! Tokenizer implementations for text analysis.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on runs of whitespace and newlines
//! - [`regex::RegexTokenizer`] - Splits on a custom delimiter pattern
//!
//! # Examples
//!
//! ```
//! use wordcheck::analysis::tokenizer::Tokenizer;
//! use wordcheck::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens = tokenizer.tokenize("Hello   world\n");
//! assert_eq!(tokens, vec!["Hello", "world"]);
//! ```

/// Trait for tokenizers that split text into words.
///
/// Implementations never yield empty tokens.
pub trait Tokenizer: Send + Sync {
    /// Split the given text into tokens, in text order.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod whitespace;
