//! Check sessions: a loaded dictionary applied to one text after another.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::config::CheckerConfig;
use crate::error::{Result, WordcheckError};
use crate::spelling::dictionary::WordDictionary;
use crate::spelling::index::OrderedWordIndex;
use crate::spelling::scorer::{Suggestion, SuggestionScorer};

/// A word missing from the dictionary, with the closest known word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misspelling {
    /// The unknown word, case-folded.
    pub word: String,
    /// Best replacement; None when the dictionary is empty.
    pub suggestion: Option<Suggestion>,
}

impl fmt::Display for Misspelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suggestion {
            Some(suggestion) => write!(
                f,
                "\"{}\" wasn't found in the dictionary, did you mean: \"{}\"?",
                self.word, suggestion.word
            ),
            None => write!(
                f,
                "\"{}\" wasn't found in the dictionary, no suggestion available",
                self.word
            ),
        }
    }
}

/// Outcome of checking one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Path of the checked text, when it came from a file.
    pub source: Option<String>,
    /// Number of tokens read from the text.
    pub tokens: usize,
    /// Number of tokens found in the dictionary.
    pub matched: usize,
    /// Unknown words in ascending order, one entry per occurrence.
    pub misspellings: Vec<Misspelling>,
}

impl CheckReport {
    /// Check if every word was found.
    pub fn is_clean(&self) -> bool {
        self.misspellings.is_empty()
    }
}

/// Checks texts against a dictionary loaded once.
pub struct CheckSession {
    dictionary: WordDictionary,
    tokenizer: Box<dyn Tokenizer>,
    scorer: SuggestionScorer,
}

impl CheckSession {
    /// Load the dictionary at `dictionary_path` with the default configuration.
    pub fn open<P: AsRef<Path>>(dictionary_path: P) -> Result<Self> {
        Self::with_config(dictionary_path, &CheckerConfig::default())
    }

    /// Load the dictionary at `dictionary_path` using `config`.
    pub fn with_config<P: AsRef<Path>>(dictionary_path: P, config: &CheckerConfig) -> Result<Self> {
        config.validate()?;
        let tokenizer = config.tokenizer()?;
        let dictionary = WordDictionary::build(dictionary_path, config.table_size, &*tokenizer)?;

        Ok(CheckSession {
            dictionary,
            tokenizer,
            scorer: SuggestionScorer::new(),
        })
    }

    /// Create a session around an already built dictionary.
    pub fn with_dictionary(dictionary: WordDictionary, tokenizer: Box<dyn Tokenizer>) -> Self {
        CheckSession {
            dictionary,
            tokenizer,
            scorer: SuggestionScorer::new(),
        }
    }

    /// The loaded dictionary.
    pub fn dictionary(&self) -> &WordDictionary {
        &self.dictionary
    }

    /// Check the text file at `path`.
    ///
    /// The file is read completely before any word is checked.
    pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<CheckReport> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).map_err(|e| WordcheckError::source_not_found(path, e))?;

        let mut report = self.check_text(&text)?;
        report.source = Some(path.display().to_string());
        info!(
            "Checked {}: {} tokens, {} misspelled",
            path.display(),
            report.tokens,
            report.misspellings.len()
        );
        Ok(report)
    }

    /// Check in-memory text.
    ///
    /// Words are indexed, walked in order, and removed from the index as they
    /// are confirmed; what is left over is reported with suggestions.
    pub fn check_text(&self, text: &str) -> Result<CheckReport> {
        let mut index = self.build_index(text);
        let mut report = CheckReport {
            tokens: index.len(),
            ..Default::default()
        };

        // Snapshot first: the walk borrows the index that we drain.
        let visited: Vec<String> = index.walk().map(|(word, _)| word.to_string()).collect();

        for word in visited {
            if self.dictionary.contains(&word) {
                index.delete(&word)?;
                report.matched += 1;
            } else {
                let suggestion = self.suggest(&word);
                debug!(
                    "{word:?} not in dictionary, best match {:?}",
                    suggestion.as_ref().map(|s| s.word.as_str())
                );
                report.misspellings.push(Misspelling { word, suggestion });
            }
        }

        debug_assert_eq!(index.len(), report.misspellings.len());
        Ok(report)
    }

    /// Index the case-folded words of `text`.
    pub fn build_index(&self, text: &str) -> OrderedWordIndex {
        index_text(text, &*self.tokenizer)
    }

    /// Best dictionary word for `word`, whether or not `word` is known.
    pub fn suggest(&self, word: &str) -> Option<Suggestion> {
        self.scorer
            .best_suggestion(&word.to_lowercase(), self.dictionary.entries())
    }
}

/// Build an ordered index of the case-folded tokens of `text`.
pub fn index_text(text: &str, tokenizer: &dyn Tokenizer) -> OrderedWordIndex {
    let mut index = OrderedWordIndex::new();
    for token in tokenizer.tokenize(text) {
        index.insert(&token.to_lowercase());
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn session(words: &[&str]) -> CheckSession {
        let mut dictionary = WordDictionary::new(17).unwrap();
        for word in words {
            dictionary.add(word);
        }
        CheckSession::with_dictionary(dictionary, Box::new(WhitespaceTokenizer::new()))
    }

    #[test]
    fn test_misspelled_word_gets_closest_suggestion() {
        let session = session(&["cat", "hat", "hot"]);
        let report = session.check_text("cet").unwrap();

        assert_eq!(report.tokens, 1);
        assert_eq!(report.matched, 0);
        assert_eq!(
            report.misspellings,
            vec![Misspelling {
                word: "cet".to_string(),
                suggestion: Some(Suggestion::new("cat".to_string(), 4)),
            }]
        );
        assert_eq!(
            report.misspellings[0].to_string(),
            "\"cet\" wasn't found in the dictionary, did you mean: \"cat\"?"
        );
    }

    #[test]
    fn test_known_word_is_not_reported() {
        let session = session(&["dog"]);
        let report = session.check_text("dog").unwrap();

        assert!(report.is_clean());
        assert_eq!(report.matched, 1);
    }

    #[test]
    fn test_empty_text() {
        let session = session(&["dog"]);
        let report = session.check_text("").unwrap();

        assert_eq!(report, CheckReport::default());
    }

    #[test]
    fn test_empty_dictionary_reports_without_suggestion() {
        let session = session(&[]);
        let report = session.check_text("anything").unwrap();

        assert_eq!(report.misspellings.len(), 1);
        assert!(report.misspellings[0].suggestion.is_none());
        assert_eq!(
            report.misspellings[0].to_string(),
            "\"anything\" wasn't found in the dictionary, no suggestion available"
        );
    }

    #[test]
    fn test_reports_follow_sorted_order() {
        let session = session(&["the", "quick", "fox"]);
        let report = session.check_text("the quikc brwn fox jumpd").unwrap();

        let words: Vec<&str> = report
            .misspellings
            .iter()
            .map(|m| m.word.as_str())
            .collect();
        assert_eq!(words, vec!["brwn", "jumpd", "quikc"]);
        assert_eq!(report.matched, 2);
        assert_eq!(report.tokens, 5);
    }

    #[test]
    fn test_case_folding() {
        let session = session(&["Dog"]);
        let report = session.check_text("DOG dog Dog CAT").unwrap();

        assert_eq!(report.matched, 3);
        assert_eq!(report.misspellings.len(), 1);
        assert_eq!(report.misspellings[0].word, "cat");
    }

    #[test]
    fn test_repeated_misspelling_reported_per_occurrence() {
        let session = session(&["cat"]);
        let report = session.check_text("cet cat cet").unwrap();

        assert_eq!(report.matched, 1);
        assert_eq!(report.misspellings.len(), 2);
        assert!(report.misspellings.iter().all(|m| m.word == "cet"));
    }

    #[test]
    fn test_session_is_reusable() {
        let session = session(&["cat", "hat", "hot"]);

        let first = session.check_text("cet hat").unwrap();
        let second = session.check_text("hot hit").unwrap();

        assert_eq!(first.misspellings.len(), 1);
        assert_eq!(second.misspellings.len(), 1);
        assert_eq!(second.misspellings[0].word, "hit");
        assert_eq!(session.dictionary().len(), 3);
    }

    #[test]
    fn test_build_index_holds_every_token() {
        let session = session(&[]);
        let index = session.build_index("b A c a");

        let words: Vec<&str> = index.walk().map(|(word, _)| word).collect();
        assert_eq!(words, vec!["a", "a", "b", "c"]);
        index.validate().unwrap();
    }

    #[test]
    fn test_check_file() {
        let mut dict_file = NamedTempFile::new().unwrap();
        writeln!(dict_file, "cat\nhat\nhot").unwrap();
        dict_file.flush().unwrap();

        let mut text_file = NamedTempFile::new().unwrap();
        writeln!(text_file, "Cat cet").unwrap();
        text_file.flush().unwrap();

        let session = CheckSession::open(dict_file.path()).unwrap();
        let report = session.check_file(text_file.path()).unwrap();

        assert_eq!(
            report.source.as_deref(),
            Some(text_file.path().display().to_string().as_str())
        );
        assert_eq!(report.matched, 1);
        assert_eq!(report.misspellings[0].word, "cet");
    }

    #[test]
    fn test_missing_sources() {
        assert!(matches!(
            CheckSession::open("/nonexistent/dictionary.txt"),
            Err(WordcheckError::SourceNotFound { .. })
        ));

        let session = session(&["cat"]);
        assert!(matches!(
            session.check_file("/nonexistent/text.txt"),
            Err(WordcheckError::SourceNotFound { .. })
        ));
    }

    #[test]
    fn test_suggest_folds_case() {
        let session = session(&["cat", "hat", "hot"]);
        assert_eq!(session.suggest("CET").unwrap().word, "cat");
    }
}
