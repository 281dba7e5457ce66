// Trie node layout

use triespell_core::alphabet::ALPHABET_SIZE;

/// One position in the character sequence space of the loaded words.
///
/// Each populated slot exclusively owns its subtree. Slot `i` holds the
/// characters that `triespell_core::char_index` maps to `i`.
#[derive(Debug)]
pub(crate) struct Node {
    /// The path from the root to this node spells a complete word.
    pub(crate) terminal: bool,
    children: [Option<Box<Node>>; ALPHABET_SIZE],
}

impl Node {
    pub(crate) const fn new() -> Self {
        Self {
            terminal: false,
            children: [const { None }; ALPHABET_SIZE],
        }
    }

    #[inline]
    pub(crate) fn child(&self, slot: usize) -> Option<&Node> {
        self.children[slot].as_deref()
    }

    /// Child at `slot`, allocating an empty one first if the slot is vacant.
    /// Returns the child and whether it was allocated.
    #[inline]
    pub(crate) fn child_or_insert(&mut self, slot: usize) -> (&mut Node, bool) {
        let entry = &mut self.children[slot];
        let created = entry.is_none();
        let child = &mut **entry.get_or_insert_with(|| Box::new(Node::new()));
        (child, created)
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|slot| slot.as_deref())
    }

    /// Detach every child, leaving all slots vacant.
    pub(crate) fn take_children(&mut self) -> impl Iterator<Item = Box<Node>> + '_ {
        self.children.iter_mut().filter_map(Option::take)
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}
