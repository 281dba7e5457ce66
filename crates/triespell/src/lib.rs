//! Spell-checking dictionary backed by a 27-way prefix tree.
//!
//! A [`Dictionary`] goes through a fixed lifecycle: [`Dictionary::load`] a
//! word list once, [`Dictionary::check`] any number of words, optionally ask
//! for its [`Dictionary::size`], then [`Dictionary::unload`] it (or drop it).
//!
//! ```no_run
//! use triespell::Dictionary;
//!
//! let mut dict = Dictionary::new();
//! dict.load("dictionaries/large")?;
//! assert!(dict.check("Hello"));
//! println!("{} words", dict.size());
//! dict.unload();
//! # Ok::<(), triespell::DictionaryError>(())
//! ```

pub mod dictionary;
pub mod loader;
pub mod options;

use std::io;
use std::path::PathBuf;

pub use dictionary::Dictionary;
pub use loader::{WordListReader, WordToken};
pub use options::LoadOptions;
pub use triespell_core::alphabet::LENGTH;
pub use triespell_trie::{Trie, TrieError};

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// `load` was called on a dictionary that still holds a trie.
    #[error("dictionary is already loaded; unload it first")]
    AlreadyLoaded,

    /// The word list could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The word list could not be read (including non UTF-8 content).
    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A token of the word list could not be inserted.
    #[error("invalid word {word:?} on line {line}: {source}")]
    InvalidWord {
        line: usize,
        word: String,
        #[source]
        source: TrieError,
    },
}
