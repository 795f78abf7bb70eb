//! Hash-bucketed word dictionary.
//!
//! Words are case-folded and spread over a fixed number of buckets. Every
//! bucket is kept sorted so membership is a hash followed by a binary search.

use std::fs;
use std::path::Path;

use log::info;

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::config::DEFAULT_TABLE_SIZE;
use crate::error::{Result, WordcheckError};

/// A dictionary of known words stored in sorted hash buckets.
///
/// Duplicates are stored as many times as they are added.
#[derive(Debug, Clone)]
pub struct WordDictionary {
    /// One sorted bucket per hash slot
    buckets: Vec<Vec<String>>,
    /// Total number of stored entries, duplicates included
    len: usize,
}

impl WordDictionary {
    /// Create an empty dictionary with `table_size` buckets.
    pub fn new(table_size: usize) -> Result<Self> {
        if table_size == 0 {
            return Err(WordcheckError::invalid_config(
                "table_size must be greater than zero",
            ));
        }

        Ok(WordDictionary {
            buckets: vec![Vec::new(); table_size],
            len: 0,
        })
    }

    /// Build a dictionary from the words of the file at `path`.
    ///
    /// Nothing is returned unless the whole source was read.
    pub fn build<P: AsRef<Path>>(
        path: P,
        table_size: usize,
        tokenizer: &dyn Tokenizer,
    ) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| WordcheckError::source_not_found(path, e))?;

        let dictionary = Self::from_text(&content, table_size, tokenizer)?;
        info!(
            "Loaded {} dictionary entries from {} into {} buckets",
            dictionary.len(),
            path.display(),
            dictionary.table_size()
        );

        Ok(dictionary)
    }

    /// Build a dictionary from a whitespace separated word file with the default table size.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::build(path, DEFAULT_TABLE_SIZE, &WhitespaceTokenizer::new())
    }

    /// Build a dictionary from in-memory text.
    pub fn from_text(text: &str, table_size: usize, tokenizer: &dyn Tokenizer) -> Result<Self> {
        let mut dictionary = WordDictionary::new(table_size)?;
        for word in tokenizer.tokenize(text) {
            dictionary.add(&word);
        }
        Ok(dictionary)
    }

    /// Add a word. Empty words are ignored.
    pub fn add(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let normalized = word.to_lowercase();
        let slot = self.hash(&normalized);
        let bucket = &mut self.buckets[slot];

        // Insert after any equal entries so the bucket stays sorted.
        let position = bucket.partition_point(|entry| entry.as_str() <= normalized.as_str());
        bucket.insert(position, normalized);
        self.len += 1;
    }

    /// Check if the dictionary contains a word, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        let normalized = word.to_lowercase();
        self.buckets[self.hash(&normalized)]
            .binary_search(&normalized)
            .is_ok()
    }

    /// Bucket index of a word.
    ///
    /// Accumulates `h = c + (h << 5) - h` over the characters with 32-bit
    /// wrapping arithmetic, then reduces `|h|` modulo the table size.
    pub fn hash(&self, word: &str) -> usize {
        let mut hash: i32 = 0;
        for c in word.chars() {
            hash = (c as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
        }
        hash.unsigned_abs() as usize % self.buckets.len()
    }

    /// Every bucket, each in sorted order.
    pub fn buckets(&self) -> &[Vec<String>] {
        &self.buckets
    }

    /// Iterate over all entries, bucket by bucket.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(String::as_str))
    }

    /// Total number of stored entries, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }
}

impl Default for WordDictionary {
    fn default() -> Self {
        WordDictionary {
            buckets: vec![Vec::new(); DEFAULT_TABLE_SIZE],
            len: 0,
        }
    }
}
