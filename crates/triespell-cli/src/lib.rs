// triespell-cli: shared utilities for the speller binary.

pub mod report;

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use log::debug;
use triespell::Dictionary;
use triespell_core::scanner::Words;

pub use report::{Report, Timings};

/// Dictionary used when none is given on the command line or in the
/// environment.
pub const DEFAULT_DICTIONARY: &str = "dictionaries/large";

/// Environment variable naming the dictionary to use by default.
pub const DICTIONARY_ENV: &str = "TRIESPELL_DICTIONARY";

pub const USAGE: &str = "Usage: speller [--json] [--max-nodes N] [DICTIONARY] TEXT";

/// Parsed command line of the speller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellerArgs {
    pub dictionary: Option<String>,
    pub text: String,
    pub json: bool,
    pub max_nodes: Option<usize>,
}

/// Parse the speller arguments (program name excluded).
pub fn parse_args(args: &[String]) -> Result<SpellerArgs, String> {
    let mut json = false;
    let mut max_nodes = None;
    let mut positional = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--max-nodes" => {
                let value = iter.next().ok_or("--max-nodes requires a value")?;
                max_nodes = Some(parse_count(value)?);
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--max-nodes=") {
                    max_nodes = Some(parse_count(value)?);
                } else if arg.starts_with('-') && arg.len() > 1 {
                    return Err(format!("unknown option: {arg}"));
                } else {
                    positional.push(arg.clone());
                }
            }
        }
    }

    let (dictionary, text) = match <[String; 2]>::try_from(positional) {
        Ok([dictionary, text]) => (Some(dictionary), text),
        Err(positional) => match <[String; 1]>::try_from(positional) {
            Ok([text]) => (None, text),
            Err(_) => return Err("expected [DICTIONARY] TEXT".to_string()),
        },
    };

    Ok(SpellerArgs {
        dictionary,
        text,
        json,
        max_nodes,
    })
}

fn parse_count(value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("invalid number for --max-nodes: {value}"))
}

/// Pick the dictionary path: explicit argument, then the value of
/// [`DICTIONARY_ENV`], then [`DEFAULT_DICTIONARY`].
pub fn resolve_dictionary(explicit: Option<&str>, env_value: Option<String>) -> PathBuf {
    explicit
        .map(PathBuf::from)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY))
}

/// [`resolve_dictionary`] against the process environment.
pub fn dictionary_path(explicit: Option<&str>) -> PathBuf {
    let path = resolve_dictionary(explicit, std::env::var(DICTIONARY_ENV).ok());
    debug!("using dictionary {}", path.display());
    path
}

/// Outcome of spell-checking a text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextCheck {
    /// Misspelled words in text order, repeats included.
    pub misspelled: Vec<String>,
    /// Number of words scanned.
    pub words: usize,
    /// Time spent inside `Dictionary::check`.
    pub elapsed: Duration,
}

/// Check every word of `text` against `dict`.
pub fn check_text(dict: &Dictionary, text: &[u8]) -> TextCheck {
    let mut result = TextCheck::default();
    for word in Words::new(text) {
        result.words += 1;

        let start = Instant::now();
        let correct = dict.check(word);
        result.elapsed += start.elapsed();

        if !correct {
            result.misspelled.push(word.to_owned());
        }
    }
    result
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
