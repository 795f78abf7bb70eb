//! Command line argument parsing for the wordcheck CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Wordcheck - check texts against a word list and suggest corrections
#[derive(Parser, Debug, Clone)]
#[command(name = "wordcheck")]
#[command(about = "Check texts against a word list and suggest corrections")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct WordcheckArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Checker configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordcheckArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check text files against a dictionary
    Check(CheckArgs),

    /// Suggest the closest dictionary word for each given word
    Suggest(SuggestArgs),

    /// Print the ordered word index built from a text file
    Walk(WalkArgs),
}

/// Arguments for checking texts
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Dictionary file (whitespace separated words)
    #[arg(short, long, value_name = "DICTIONARY", env = "WORDCHECK_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Text files to check, in order
    #[arg(value_name = "TEXT_FILE", required = true)]
    pub texts: Vec<PathBuf>,
}

/// Arguments for word suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Dictionary file (whitespace separated words)
    #[arg(short, long, value_name = "DICTIONARY", env = "WORDCHECK_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for printing a text's word index
#[derive(Parser, Debug, Clone)]
pub struct WalkArgs {
    /// Text file to index
    #[arg(value_name = "TEXT_FILE")]
    pub text: PathBuf,

    /// Verify the tree invariants and report the black-height
    #[arg(long)]
    pub validate: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_check_command() {
        let args = WordcheckArgs::try_parse_from([
            "wordcheck",
            "check",
            "--dictionary",
            "words.txt",
            "first.txt",
            "second.txt",
        ])
        .unwrap();

        if let Command::Check(check_args) = args.command {
            assert_eq!(check_args.dictionary, PathBuf::from("words.txt"));
            assert_eq!(
                check_args.texts,
                vec![PathBuf::from("first.txt"), PathBuf::from("second.txt")]
            );
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_check_requires_a_text() {
        let result = WordcheckArgs::try_parse_from(["wordcheck", "check", "-d", "words.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_suggest_command() {
        let args =
            WordcheckArgs::try_parse_from(["wordcheck", "suggest", "-d", "words.txt", "cet", "hte"])
                .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.dictionary, PathBuf::from("words.txt"));
            assert_eq!(suggest_args.words, vec!["cet", "hte"]);
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_walk_command() {
        let args =
            WordcheckArgs::try_parse_from(["wordcheck", "walk", "text.txt", "--validate"]).unwrap();

        if let Command::Walk(walk_args) = args.command {
            assert_eq!(walk_args.text, PathBuf::from("text.txt"));
            assert!(walk_args.validate);
        } else {
            panic!("Expected Walk command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = WordcheckArgs::try_parse_from(["wordcheck", "walk", "t.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flag
        let args = WordcheckArgs::try_parse_from(["wordcheck", "-v", "walk", "t.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = WordcheckArgs::try_parse_from(["wordcheck", "-vvv", "walk", "t.txt"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        // Quiet flag
        let args =
            WordcheckArgs::try_parse_from(["wordcheck", "-vv", "--quiet", "walk", "t.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format_and_config() {
        let args = WordcheckArgs::try_parse_from([
            "wordcheck",
            "--format",
            "json",
            "--pretty",
            "--config",
            "wordcheck.json",
            "walk",
            "t.txt",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert_eq!(args.config, Some(PathBuf::from("wordcheck.json")));
    }

    #[test]
    fn test_version_flag() {
        let error = WordcheckArgs::try_parse_from(["wordcheck", "--version"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(error.to_string().contains(crate::VERSION));
    }
}
