// Dictionary load options

use triespell_core::alphabet::LENGTH;
use triespell_trie::Trie;

/// Limits applied while a word list is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Longest accepted word, in characters. Default: [`LENGTH`].
    pub max_word_len: usize,
    /// Maximum number of trie nodes, root included. Default: unlimited.
    ///
    /// Reaching the limit fails the load the same way an allocation failure
    /// would.
    pub node_limit: Option<usize>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_word_len: LENGTH,
            node_limit: None,
        }
    }
}

impl LoadOptions {
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    pub fn with_node_limit(mut self, node_limit: usize) -> Self {
        self.node_limit = Some(node_limit);
        self
    }

    /// Build an empty trie honoring these options.
    pub(crate) fn new_trie(&self) -> Trie {
        let trie = Trie::new().with_max_word_len(self.max_word_len);
        match self.node_limit {
            Some(limit) => trie.with_node_limit(limit),
            None => trie,
        }
    }
}
