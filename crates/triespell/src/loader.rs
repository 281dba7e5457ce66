// Word list reader
//
// A word list is plain text holding one word per whitespace-separated token;
// line breaks carry no meaning beyond separating tokens. Whitespace is the C
// `isspace` set: ASCII whitespace plus vertical tab.

use std::io::{BufRead, Lines};

use crate::DictionaryError;

/// A token read from a word list, with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    pub line: usize,
    pub text: String,
}

/// Iterator over the tokens of a word list.
///
/// Yields tokens in source order. A read error is yielded once and ends the
/// iteration.
pub struct WordListReader<R> {
    lines: Lines<R>,
    line: usize,
    current: String,
    cursor: usize,
    failed: bool,
}

/// Whether `b` separates tokens.
fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'\x0b'
}

impl<R: BufRead> WordListReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            current: String::new(),
            cursor: 0,
            failed: false,
        }
    }

    /// Next token of the current line, advancing the cursor past it.
    fn next_in_line(&mut self) -> Option<String> {
        let bytes = self.current.as_bytes();
        let start = self.cursor
            + bytes[self.cursor..]
                .iter()
                .position(|&b| !is_separator(b))?;
        let end = bytes[start..]
            .iter()
            .position(|&b| is_separator(b))
            .map_or(bytes.len(), |len| start + len);
        self.cursor = end;
        // Separators are ASCII, so both ends fall on char boundaries.
        Some(self.current[start..end].to_owned())
    }
}

impl<R: BufRead> Iterator for WordListReader<R> {
    type Item = Result<WordToken, DictionaryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(text) = self.next_in_line() {
                return Some(Ok(WordToken {
                    line: self.line,
                    text,
                }));
            }
            if self.failed {
                return None;
            }

            match self.lines.next()? {
                Ok(line) => {
                    self.line += 1;
                    self.current = line;
                    self.cursor = 0;
                }
                Err(source) => {
                    self.failed = true;
                    return Some(Err(DictionaryError::Read {
                        line: self.line + 1,
                        source,
                    }));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &[u8]) -> Vec<(usize, String)> {
        WordListReader::new(input)
            .map(|t| t.unwrap())
            .map(|t| (t.line, t.text))
            .collect()
    }

    #[test]
    fn one_word_per_line() {
        assert_eq!(
            tokens(b"cat\ndog\n"),
            vec![(1, "cat".to_string()), (2, "dog".to_string())]
        );
    }

    #[test]
    fn any_whitespace_separates_tokens() {
        assert_eq!(
            tokens(b"  a an\tand\r\n\n\nzebra  "),
            vec![
                (1, "a".to_string()),
                (1, "an".to_string()),
                (1, "and".to_string()),
                (4, "zebra".to_string()),
            ]
        );
    }

    #[test]
    fn vertical_tab_and_form_feed_separate_tokens() {
        assert_eq!(
            tokens(b"cat\x0bdog\x0cemu\n"),
            vec![
                (1, "cat".to_string()),
                (1, "dog".to_string()),
                (1, "emu".to_string()),
            ]
        );
    }

    #[test]
    fn long_single_line_list() {
        let line = vec!["word"; 10_000].join(" ");
        let all = tokens(line.as_bytes());
        assert_eq!(all.len(), 10_000);
        assert!(all.iter().all(|(line, text)| *line == 1 && text == "word"));
    }

    #[test]
    fn missing_final_newline() {
        assert_eq!(tokens(b"last"), vec![(1, "last".to_string())]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokens(b"").is_empty());
        assert!(tokens(b"\n \n\t\n").is_empty());
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let mut reader = WordListReader::new(&b"good\n\xff\xfe\nnever\n"[..]);
        assert_eq!(reader.next().unwrap().unwrap().text, "good");
        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(err, DictionaryError::Read { line: 2, .. }));
        assert!(reader.next().is_none());
    }
}
