// speller: Report the misspelled words of a text.
//
// Loads a dictionary, checks every word of the text against it and prints
// the misspellings followed by counts and the time spent in each dictionary
// operation.
//
// Usage:
//   speller [--json] [--max-nodes N] [DICTIONARY] TEXT
//
// Options:
//   --json          Print the report as JSON
//   --max-nodes N   Fail the load if the trie would exceed N nodes
//   -h, --help      Print help
//
// DICTIONARY defaults to $TRIESPELL_DICTIONARY, then dictionaries/large.
// Set RUST_LOG=debug to trace the dictionary lifecycle.

use std::fs;
use std::io::{self, Write};
use std::time::Instant;

use triespell::{Dictionary, LoadOptions};
use triespell_cli::{Report, Timings};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if triespell_cli::wants_help(&args) {
        println!("speller: Report the misspelled words of a text.");
        println!();
        println!("{}", triespell_cli::USAGE);
        println!();
        println!("Options:");
        println!("  --json          Print the report as JSON");
        println!("  --max-nodes N   Fail the load if the trie would exceed N nodes");
        println!("  -h, --help      Print this help");
        println!();
        println!(
            "DICTIONARY defaults to ${}, then {}.",
            triespell_cli::DICTIONARY_ENV,
            triespell_cli::DEFAULT_DICTIONARY
        );
        return;
    }

    let args = triespell_cli::parse_args(&args).unwrap_or_else(|e| {
        eprintln!("{}", triespell_cli::USAGE);
        triespell_cli::fatal(&e)
    });

    let dict_path = triespell_cli::dictionary_path(args.dictionary.as_deref());
    let options = match args.max_nodes {
        Some(limit) => LoadOptions::default().with_node_limit(limit),
        None => LoadOptions::default(),
    };
    let mut dict = Dictionary::with_options(options);

    let start = Instant::now();
    let loaded = dict.load(&dict_path);
    let load_time = start.elapsed();

    if let Err(e) = loaded {
        dict.unload();
        eprintln!("Could not load {}.", dict_path.display());
        triespell_cli::fatal(&e.to_string());
    }

    let text = fs::read(&args.text).unwrap_or_else(|e| {
        dict.unload();
        eprintln!("Could not open {}.", args.text);
        triespell_cli::fatal(&e.to_string())
    });

    let checked = triespell_cli::check_text(&dict, &text);

    let start = Instant::now();
    let words_in_dictionary = dict.size();
    let size_time = start.elapsed();

    let start = Instant::now();
    dict.unload();
    let unload_time = start.elapsed();

    let report = Report {
        words_misspelled: checked.misspelled.len(),
        misspelled: checked.misspelled,
        words_in_dictionary,
        words_in_text: checked.words,
        timings: Timings::new(load_time, checked.elapsed, size_time, unload_time),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.json {
        if let Err(e) = serde_json::to_writer_pretty(&mut out, &report) {
            triespell_cli::fatal(&format!("failed to write report: {e}"));
        }
        let _ = writeln!(out);
    } else {
        let _ = write!(out, "{}", report.misspellings());
        let _ = writeln!(out);
        let _ = write!(out, "{report}");
    }
    let _ = out.flush();
}
