//! Prefix tree (trie) engine for the triespell dictionary.
//!
//! Every node owns a fixed array of 27 optional children, one per symbol of
//! the dictionary alphabet (see [`triespell_core::alphabet`]). Words are
//! stored by path; a terminal flag marks the nodes that end a word.
//!
//! # Architecture
//!
//! - `node` -- node layout and child slot access
//! - [`trie`] -- insertion, lookup, counting and teardown

mod node;
pub mod trie;

pub use trie::Trie;

/// Error type for trie insertion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    #[error("empty word")]
    EmptyWord,
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("word too long: {len} characters, maximum is {max}")]
    WordTooLong { len: usize, max: usize },
    #[error("node limit of {limit} reached")]
    NodeLimit { limit: usize },
}
