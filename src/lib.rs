//! # Wordcheck
//!
//! A dictionary-driven spell checker for Rust.
//!
//! ## Features
//!
//! - Hash-bucketed dictionary with sorted buckets
//! - Red-black tree index of the words under check
//! - Longest-common-subsequence suggestion scoring
//! - Reusable check sessions over many texts
//!
//! ## Example
//!
//! ```
//! use wordcheck::prelude::*;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let dictionary = WordDictionary::from_text("cat hat hot", 1349, &tokenizer).unwrap();
//! let session = CheckSession::with_dictionary(dictionary, Box::new(tokenizer));
//!
//! let report = session.check_text("the cet").unwrap();
//! assert_eq!(report.misspellings.len(), 2);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
    pub use crate::config::CheckerConfig;
    pub use crate::error::{Result, WordcheckError};
    pub use crate::spelling::dictionary::WordDictionary;
    pub use crate::spelling::index::{Color, OrderedWordIndex};
    pub use crate::spelling::scorer::{Suggestion, SuggestionScorer};
    pub use crate::spelling::session::{CheckReport, CheckSession, Misspelling};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
