//! Command implementations for the wordcheck CLI.

use std::fs;
use std::io::{self, Write};

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::CheckerConfig;
use crate::error::{Result, WordcheckError};
use crate::spelling::session::{CheckSession, index_text};

/// Execute a CLI command.
pub fn execute_command(args: WordcheckArgs) -> Result<()> {
    let config = load_config(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Check(check_args) => {
            let results = check_texts(check_args, &config)?;
            output_result(&results, &args, &mut out)?;
        }
        Command::Suggest(suggest_args) => {
            let results = suggest_words(suggest_args, &config)?;
            output_result(&results, &args, &mut out)?;
        }
        Command::Walk(walk_args) => {
            let results = walk_text(walk_args, &config)?;
            output_result(&results, &args, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Load the configuration named on the command line, or the defaults.
fn load_config(args: &WordcheckArgs) -> Result<CheckerConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            CheckerConfig::load_from_file(path)
        }
        None => Ok(CheckerConfig::default()),
    }
}

/// Check every text against one loaded dictionary.
///
/// Fails without results if any text cannot be read.
pub fn check_texts(args: &CheckArgs, config: &CheckerConfig) -> Result<CheckResults> {
    let session = CheckSession::with_config(&args.dictionary, config)?;

    let reports = args
        .texts
        .iter()
        .map(|text| session.check_file(text))
        .collect::<Result<Vec<_>>>()?;

    Ok(CheckResults { reports })
}

/// Look up the best suggestion for each word.
pub fn suggest_words(args: &SuggestArgs, config: &CheckerConfig) -> Result<SuggestResults> {
    let session = CheckSession::with_config(&args.dictionary, config)?;

    let suggestions = args
        .words
        .iter()
        .map(|word| WordSuggestion {
            word: word.to_lowercase(),
            known: session.dictionary().contains(word),
            suggestion: session.suggest(word),
        })
        .collect();

    Ok(SuggestResults { suggestions })
}

/// Build the word index of a text and list it in order.
pub fn walk_text(args: &WalkArgs, config: &CheckerConfig) -> Result<WalkResults> {
    config.validate()?;
    let text = fs::read_to_string(&args.text)
        .map_err(|e| WordcheckError::source_not_found(&args.text, e))?;

    let tokenizer = config.tokenizer()?;
    let index = index_text(&text, &*tokenizer);

    let black_height = if args.validate {
        Some(index.validate()?)
    } else {
        None
    };

    let entries = index
        .walk()
        .map(|(value, color)| WalkEntry {
            value: value.to_string(),
            color,
        })
        .collect();

    Ok(WalkResults {
        source: args.text.display().to_string(),
        entries,
        black_height,
    })
}
