//! Suggestion scoring for unknown words.
//!
//! A candidate's score is the length of its longest common subsequence with
//! the unknown word, plus a bonus when the two lengths are close:
//!
//! | length difference | bonus |
//! |-------------------|-------|
//! | 0                 | 2     |
//! | 1                 | 1     |
//! | 2 or more         | 0     |
//!
//! The bonus only applies when the subsequence is non-empty.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The best dictionary word found for an unknown word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Subsequence length plus length bonus.
    pub score: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, score: usize) -> Self {
        Suggestion { word, score }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

/// Length of the longest common subsequence of two words, by character.
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Two rolling rows over b.
    let mut prev_row = vec![0usize; b.len() + 1];
    let mut curr_row = vec![0usize; b.len() + 1];

    for &ca in &a {
        for (j, &cb) in b.iter().enumerate() {
            curr_row[j + 1] = if ca == cb {
                prev_row[j] + 1
            } else {
                prev_row[j + 1].max(curr_row[j])
            };
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

/// Bonus for words of equal or nearly equal length.
pub fn length_bonus(a: &str, b: &str) -> usize {
    match a.chars().count().abs_diff(b.chars().count()) {
        0 => 2,
        1 => 1,
        _ => 0,
    }
}

/// Scores dictionary entries against unknown words.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionScorer;

impl SuggestionScorer {
    /// Create a new scorer.
    pub fn new() -> Self {
        SuggestionScorer
    }

    /// Score `dictionary_word` as a replacement for `candidate`.
    pub fn score(&self, dictionary_word: &str, candidate: &str) -> usize {
        let common = lcs_length(dictionary_word, candidate);
        if common == 0 {
            return 0;
        }
        common + length_bonus(dictionary_word, candidate)
    }

    /// Pick the highest scoring entry for `unknown_word`.
    ///
    /// Entries are scanned once, in order; on a tie the earlier entry is kept.
    /// Returns `None` only when there are no entries.
    pub fn best_suggestion<'a, I>(&self, unknown_word: &str, entries: I) -> Option<Suggestion>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut best: Option<(&str, usize)> = None;

        for entry in entries {
            let score = self.score(entry, unknown_word);
            match best {
                Some((_, max)) if score <= max => {}
                _ => best = Some((entry, score)),
            }
        }

        best.map(|(word, score)| Suggestion::new(word.to_string(), score))
    }
}
