//! Shared primitives for the triespell crates.
//!
//! - [`alphabet`] -- the 27-symbol dictionary alphabet and its slot indexer
//! - [`scanner`] -- extraction of candidate words from running text

pub mod alphabet;
pub mod scanner;

pub use alphabet::{ALPHABET_SIZE, APOSTROPHE_INDEX, LENGTH, char_index};
pub use scanner::Words;
