// Trie: insertion, lookup, word counting and teardown.
//
// Counting and teardown walk the tree with an explicit stack, so neither
// depends on the call stack even when the maximum word length is raised far
// beyond the default.

use triespell_core::alphabet::{LENGTH, char_index};

use crate::TrieError;
use crate::node::Node;

/// A 27-way prefix tree of dictionary words.
///
/// The root node always exists and never ends a word. Nodes are allocated by
/// [`Trie::insert`] and released by [`Trie::clear`] or when the trie is
/// dropped.
#[derive(Debug)]
pub struct Trie {
    root: Node,
    /// Number of live nodes, root included.
    node_count: usize,
    max_word_len: usize,
    node_limit: Option<usize>,
}

impl Trie {
    /// Create an empty trie accepting words of up to [`LENGTH`] characters.
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            node_count: 1,
            max_word_len: LENGTH,
            node_limit: None,
        }
    }

    /// Accept words of up to `max_word_len` characters.
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    /// Refuse insertions that would grow the trie beyond `limit` nodes
    /// (root included). The root always exists, so the limit is at least 1.
    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit.max(1));
        self
    }

    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    pub fn node_limit(&self) -> Option<usize> {
        self.node_limit
    }

    /// Insert a word, case-insensitively.
    ///
    /// The word is validated before the trie is touched: on error nothing is
    /// allocated. Returns `true` if the word was not present before.
    pub fn insert(&mut self, word: &str) -> Result<bool, TrieError> {
        let slots = self.slots(word)?;

        if let Some(limit) = self.node_limit {
            let needed = self.missing_nodes(&slots);
            if self.node_count + needed > limit {
                return Err(TrieError::NodeLimit { limit });
            }
        }

        let mut created = 0;
        let mut node = &mut self.root;
        for &slot in &slots {
            let (child, allocated) = node.child_or_insert(slot);
            created += usize::from(allocated);
            node = child;
        }

        let added = !node.terminal;
        node.terminal = true;
        self.node_count += created;
        Ok(added)
    }

    /// Whether `word` was inserted, ignoring letter case.
    ///
    /// Characters outside the dictionary alphabet never match.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.terminal)
    }

    /// Number of distinct words in the trie.
    ///
    /// Walks the whole tree; the result is not cached.
    pub fn word_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += usize::from(node.terminal);
            stack.extend(node.children());
        }
        count
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Release every node below the root. Returns the number of nodes freed.
    ///
    /// Each node is detached from its parent before it is freed and every
    /// child is visited exactly once.
    pub fn clear(&mut self) -> usize {
        let mut freed = 0;
        let mut stack: Vec<Box<Node>> = self.root.take_children().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children());
            freed += 1;
        }
        self.root.terminal = false;
        self.node_count = 1;
        freed
    }

    fn find(&self, word: &str) -> Option<&Node> {
        let mut node = &self.root;
        for c in word.chars() {
            node = node.child(char_index(c)?)?;
        }
        Some(node)
    }

    fn slots(&self, word: &str) -> Result<Vec<usize>, TrieError> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }
        let len = word.chars().count();
        if len > self.max_word_len {
            return Err(TrieError::WordTooLong {
                len,
                max: self.max_word_len,
            });
        }
        word.chars()
            .enumerate()
            .map(|(position, ch)| {
                char_index(ch).ok_or(TrieError::InvalidCharacter { ch, position })
            })
            .collect()
    }

    /// Nodes that inserting the word spelled by `slots` would allocate.
    fn missing_nodes(&self, slots: &[usize]) -> usize {
        let mut node = &self.root;
        let mut depth = 0;
        for &slot in slots {
            match node.child(slot) {
                Some(child) => {
                    node = child;
                    depth += 1;
                }
                None => break,
            }
        }
        slots.len() - depth
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Trie {
    fn drop(&mut self) {
        self.clear();
    }
}
