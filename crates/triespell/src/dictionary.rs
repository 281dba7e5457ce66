// Dictionary: owned handle over a trie with a load / check / size / unload
// lifecycle.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use triespell_trie::Trie;

use crate::DictionaryError;
use crate::loader::{WordListReader, WordToken};
use crate::options::LoadOptions;

/// A spell-checking dictionary.
///
/// The dictionary is either unloaded (no trie) or loaded. Loading an already
/// loaded dictionary is refused with [`DictionaryError::AlreadyLoaded`];
/// every query on an unloaded dictionary answers as if it were empty.
///
/// `check` and `size` borrow the dictionary immutably and may run from any
/// number of threads at once; `load` and `unload` need exclusive access.
#[derive(Debug, Default)]
pub struct Dictionary {
    trie: Option<Trie>,
    options: LoadOptions,
}

impl Dictionary {
    /// Create an unloaded dictionary with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unloaded dictionary with the given options.
    pub fn with_options(options: LoadOptions) -> Self {
        Self {
            trie: None,
            options,
        }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    pub fn is_loaded(&self) -> bool {
        self.trie.is_some()
    }

    /// Load the word list at `path`.
    ///
    /// See [`Dictionary::load_from_reader`] for the failure semantics.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DictionaryError> {
        if self.is_loaded() {
            return Err(DictionaryError::AlreadyLoaded);
        }
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loading dictionary from {}", path.display());
        self.load_from_reader(BufReader::new(file))
    }

    /// Load a word list from `reader`.
    ///
    /// Every whitespace-separated token is inserted in source order. On
    /// failure the words inserted so far are kept and the dictionary stays
    /// loaded: it must be unloaded before another load, and should not be
    /// used for checking.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<(), DictionaryError> {
        if self.is_loaded() {
            return Err(DictionaryError::AlreadyLoaded);
        }
        let trie = self.trie.insert(self.options.new_trie());

        match fill(trie, reader) {
            Ok(tokens) => {
                if trie.is_empty() {
                    warn!("dictionary loaded from an empty word list");
                }
                debug!(
                    "dictionary loaded: {tokens} tokens, {} nodes",
                    trie.node_count()
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    "dictionary load aborted with {} nodes allocated: {err}",
                    trie.node_count()
                );
                Err(err)
            }
        }
    }

    /// Whether `word` is in the dictionary, ignoring letter case.
    ///
    /// Words containing anything but ASCII letters and apostrophes are never
    /// in the dictionary.
    pub fn check(&self, word: &str) -> bool {
        self.trie.as_ref().is_some_and(|trie| trie.contains(word))
    }

    /// Number of distinct words loaded, 0 if nothing is loaded.
    pub fn size(&self) -> usize {
        self.trie.as_ref().map_or(0, Trie::word_count)
    }

    /// Number of trie nodes currently allocated, root included.
    pub fn node_count(&self) -> usize {
        self.trie.as_ref().map_or(0, Trie::node_count)
    }

    /// Release every node of the trie, root included.
    ///
    /// Returns `false` if nothing was loaded. The dictionary can be loaded
    /// again afterwards.
    pub fn unload(&mut self) -> bool {
        let Some(mut trie) = self.trie.take() else {
            return false;
        };
        let freed = trie.clear() + 1;
        drop(trie);
        debug!("dictionary unloaded: {freed} nodes freed");
        true
    }
}

/// Insert every token of `reader` into `trie`. Returns the number of tokens.
fn fill<R: BufRead>(trie: &mut Trie, reader: R) -> Result<usize, DictionaryError> {
    let mut tokens = 0;
    for token in WordListReader::new(reader) {
        let WordToken { line, text } = token?;
        if let Err(source) = trie.insert(&text) {
            return Err(DictionaryError::InvalidWord {
                line,
                word: text,
                source,
            });
        }
        tokens += 1;
    }
    Ok(tokens)
}
