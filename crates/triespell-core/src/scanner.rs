// Word extraction from running text.
//
// The scanner works on raw bytes and only recognizes ASCII letters, so any
// encoding that is a superset of ASCII can be scanned; non-ASCII bytes simply
// separate words.

use crate::alphabet::LENGTH;

/// Iterator over the candidate words of a text.
///
/// A word is a run of ASCII letters, optionally containing apostrophes after
/// its first character. Two kinds of runs are dropped instead of yielded:
///
/// - runs longer than [`LENGTH`]: the rest of the alphabetical run is skipped;
/// - runs that hit a digit: the rest of the alphanumeric run is skipped.
///
/// In both cases the byte that ends the skipped run is consumed with it.
/// A word that reaches the end of the text is yielded.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a [u8],
    pos: usize,
}

impl<'a> Words<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self { text, pos: 0 }
    }

    /// Byte offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn skip_while(&mut self, keep: impl Fn(u8) -> bool) {
        while let Some(&b) = self.text.get(self.pos) {
            self.pos += 1;
            if !keep(b) {
                break;
            }
        }
    }

    fn word(&self, start: usize, len: usize) -> Option<&'a str> {
        let text: &'a [u8] = self.text;
        // Only ASCII letters and apostrophes are ever part of the slice.
        std::str::from_utf8(&text[start..start + len]).ok()
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let mut start = self.pos;
        let mut len = 0;

        while let Some(&b) = self.text.get(self.pos) {
            self.pos += 1;

            if b.is_ascii_alphabetic() || (b == b'\'' && len > 0) {
                if len == 0 {
                    start = self.pos - 1;
                }
                len += 1;
                if len > LENGTH {
                    self.skip_while(|b| b.is_ascii_alphabetic());
                    len = 0;
                }
            } else if b.is_ascii_digit() {
                self.skip_while(|b| b.is_ascii_alphanumeric());
                len = 0;
            } else if len > 0 {
                return self.word(start, len);
            }
        }

        if len > 0 { self.word(start, len) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        Words::new(text.as_bytes()).collect()
    }

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        assert_eq!(
            words("The quick, brown fox. Jumped!"),
            vec!["The", "quick", "brown", "fox", "Jumped"]
        );
    }

    #[test]
    fn keeps_inner_and_trailing_apostrophes() {
        assert_eq!(words("don't dogs' rock'n'roll"), vec!["don't", "dogs'", "rock'n'roll"]);
    }

    #[test]
    fn leading_apostrophe_is_not_part_of_word() {
        assert_eq!(words("'tis 'quoted'"), vec!["tis", "quoted'"]);
    }

    #[test]
    fn words_with_digits_are_dropped() {
        assert_eq!(words("cat abc123def dog"), vec!["cat", "dog"]);
        assert_eq!(words("route66 is 1a long"), vec!["is", "long"]);
    }

    #[test]
    fn digit_skip_consumes_terminator() {
        // The skip swallows the byte ending the run; a letter right after that
        // byte still starts a new word.
        assert_eq!(words("x1-y"), vec!["y"]);
    }

    #[test]
    fn overlong_runs_are_dropped() {
        let long = "a".repeat(LENGTH + 1);
        let text = format!("ok {long}more tail");
        assert_eq!(words(&text), vec!["ok", "tail"]);
    }

    #[test]
    fn word_of_exactly_max_length_is_kept() {
        let exact = "b".repeat(LENGTH);
        let text = format!("{exact} end");
        assert_eq!(words(&text), vec![exact.as_str(), "end"]);
    }

    #[test]
    fn final_word_without_terminator_is_yielded() {
        assert_eq!(words("last word"), vec!["last", "word"]);
    }

    #[test]
    fn non_ascii_bytes_separate_words() {
        assert_eq!(words("caf\u{00E9} na\u{00EF}ve"), vec!["caf", "na", "ve"]);
    }

    #[test]
    fn empty_and_blank_text_have_no_words() {
        assert!(words("").is_empty());
        assert!(words(" \n\t 42 ... ").is_empty());
    }

    #[test]
    fn position_tracks_consumed_bytes() {
        let mut scanner = Words::new(b"ab cd");
        assert_eq!(scanner.next(), Some("ab"));
        assert_eq!(scanner.position(), 3);
        assert_eq!(scanner.next(), Some("cd"));
        assert_eq!(scanner.position(), 5);
        assert_eq!(scanner.next(), None);
    }
}
