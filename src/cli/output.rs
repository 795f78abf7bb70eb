//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordcheckArgs};
use crate::error::Result;
use crate::spelling::index::Color;
use crate::spelling::scorer::Suggestion;
use crate::spelling::session::CheckReport;

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub reports: Vec<CheckReport>,
}

/// Suggestion for a single looked-up word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordSuggestion {
    pub word: String,
    pub known: bool,
    pub suggestion: Option<Suggestion>,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResults {
    pub suggestions: Vec<WordSuggestion>,
}

/// One node visited by the in-order walk.
#[derive(Debug, Serialize, Deserialize)]
pub struct WalkEntry {
    pub value: String,
    pub color: Color,
}

/// Result structure for the walk command.
#[derive(Debug, Serialize, Deserialize)]
pub struct WalkResults {
    pub source: String,
    pub entries: Vec<WalkEntry>,
    pub black_height: Option<usize>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> Result<()>;
}

impl HumanOutput for CheckResults {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> Result<()> {
        for report in &self.reports {
            if verbosity > 1
                && let Some(source) = &report.source
            {
                writeln!(out, "{source}:")?;
            }

            for misspelling in &report.misspellings {
                writeln!(out, "{misspelling}")?;
            }

            if verbosity > 1 {
                writeln!(
                    out,
                    "{} tokens, {} matched, {} misspelled",
                    report.tokens,
                    report.matched,
                    report.misspellings.len()
                )?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for SuggestResults {
    fn write_human(&self, out: &mut dyn Write, _verbosity: u8) -> Result<()> {
        for entry in &self.suggestions {
            match (&entry.suggestion, entry.known) {
                (_, true) => writeln!(out, "{}: found in dictionary", entry.word)?,
                (Some(suggestion), false) => writeln!(
                    out,
                    "{} -> {} (score {})",
                    entry.word, suggestion.word, suggestion.score
                )?,
                (None, false) => writeln!(out, "{}: no suggestion available", entry.word)?,
            }
        }
        Ok(())
    }
}

impl HumanOutput for WalkResults {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> Result<()> {
        if verbosity > 1 {
            writeln!(out, "{}:", self.source)?;
        }
        for entry in &self.entries {
            writeln!(out, "{} {}", entry.value, entry.color)?;
        }
        if let Some(black_height) = self.black_height {
            writeln!(out, "black-height: {black_height}")?;
        }
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(result: &T, args: &WordcheckArgs, out: &mut dyn Write) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out, args.verbosity()),
        OutputFormat::Json => output_json(result, args, out),
    }
}

fn output_json<T: Serialize>(result: &T, args: &WordcheckArgs, out: &mut dyn Write) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::session::Misspelling;
    use clap::Parser;

    fn render<T: Serialize + HumanOutput>(result: &T, argv: &[&str]) -> String {
        let args = WordcheckArgs::try_parse_from(argv).unwrap();
        let mut buffer = Vec::new();
        output_result(result, &args, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn sample_report() -> CheckReport {
        CheckReport {
            source: Some("text.txt".to_string()),
            tokens: 3,
            matched: 2,
            misspellings: vec![Misspelling {
                word: "cet".to_string(),
                suggestion: Some(Suggestion::new("cat".to_string(), 4)),
            }],
        }
    }

    #[test]
    fn test_check_results_human() {
        let results = CheckResults {
            reports: vec![sample_report()],
        };

        let output = render(&results, &["wordcheck", "walk", "t.txt"]);
        assert_eq!(
            output,
            "\"cet\" wasn't found in the dictionary, did you mean: \"cat\"?\n"
        );

        let output = render(&results, &["wordcheck", "-vv", "walk", "t.txt"]);
        assert!(output.starts_with("text.txt:\n"));
        assert!(output.ends_with("3 tokens, 2 matched, 1 misspelled\n"));
    }

    #[test]
    fn test_check_results_json() {
        let results = CheckResults {
            reports: vec![sample_report()],
        };

        let output = render(&results, &["wordcheck", "-f", "json", "walk", "t.txt"]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["reports"][0]["misspellings"][0]["word"], "cet");
        assert_eq!(
            value["reports"][0]["misspellings"][0]["suggestion"]["word"],
            "cat"
        );
    }

    #[test]
    fn test_suggest_results_human() {
        let results = SuggestResults {
            suggestions: vec![
                WordSuggestion {
                    word: "cat".to_string(),
                    known: true,
                    suggestion: Some(Suggestion::new("cat".to_string(), 5)),
                },
                WordSuggestion {
                    word: "cet".to_string(),
                    known: false,
                    suggestion: Some(Suggestion::new("cat".to_string(), 4)),
                },
                WordSuggestion {
                    word: "xyz".to_string(),
                    known: false,
                    suggestion: None,
                },
            ],
        };

        let output = render(&results, &["wordcheck", "walk", "t.txt"]);
        assert_eq!(
            output,
            "cat: found in dictionary\ncet -> cat (score 4)\nxyz: no suggestion available\n"
        );
    }

    #[test]
    fn test_walk_results_human() {
        let results = WalkResults {
            source: "text.txt".to_string(),
            entries: vec![
                WalkEntry {
                    value: "a".to_string(),
                    color: Color::Red,
                },
                WalkEntry {
                    value: "b".to_string(),
                    color: Color::Black,
                },
            ],
            black_height: Some(1),
        };

        let output = render(&results, &["wordcheck", "walk", "t.txt"]);
        assert_eq!(output, "a RED\nb BLACK\nblack-height: 1\n");

        let output = render(&results, &["wordcheck", "-f", "json", "walk", "t.txt"]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["entries"][0]["color"], "RED");
        assert_eq!(value["black_height"], 1);
    }
}
