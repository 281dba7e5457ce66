// Dictionary alphabet: the 26 English letters plus apostrophe.
//
// Every character that can appear in a dictionary word maps to a fixed slot
// in a trie node's child array. Letters are case-insensitive.

/// Maximum length of a dictionary word.
///
/// 45 characters covers the longest word in the major English dictionaries
/// ("pneumonoultramicroscopicsilicovolcanoconiosis").
pub const LENGTH: usize = 45;

/// Number of child slots per trie node.
pub const ALPHABET_SIZE: usize = 27;

/// Slot used for the apostrophe.
pub const APOSTROPHE_INDEX: usize = 26;

/// Map a character to its child slot.
///
/// `A-Z` and `a-z` map to `0..=25`, `'` maps to [`APOSTROPHE_INDEX`].
/// Every other character returns `None`, so callers never compute a slot for
/// input outside the alphabet.
#[inline]
pub fn char_index(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some(c as usize - 'a' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize),
        '\'' => Some(APOSTROPHE_INDEX),
        _ => None,
    }
}
