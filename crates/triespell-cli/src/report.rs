// Speller run report: counts and per-operation timings.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Seconds spent in each dictionary operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Timings {
    pub load: f64,
    pub check: f64,
    pub size: f64,
    pub unload: f64,
}

impl Timings {
    pub fn new(load: Duration, check: Duration, size: Duration, unload: Duration) -> Self {
        Self {
            load: load.as_secs_f64(),
            check: check.as_secs_f64(),
            size: size.as_secs_f64(),
            unload: unload.as_secs_f64(),
        }
    }

    pub fn total(&self) -> f64 {
        self.load + self.check + self.size + self.unload
    }
}

/// Result of one speller run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub misspelled: Vec<String>,
    pub words_misspelled: usize,
    pub words_in_dictionary: usize,
    pub words_in_text: usize,
    pub timings: Timings,
}

impl Report {
    /// Misspelled words under their header, one per line.
    pub fn misspellings(&self) -> String {
        let mut out = String::from("\nMISSPELLED WORDS\n\n");
        for word in &self.misspelled {
            out.push_str(word);
            out.push('\n');
        }
        out
    }
}

/// The summary block, labels padded to a common column.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.timings;
        writeln!(f, "{:<22}{}", "WORDS MISSPELLED:", self.words_misspelled)?;
        writeln!(f, "{:<22}{}", "WORDS IN DICTIONARY:", self.words_in_dictionary)?;
        writeln!(f, "{:<22}{}", "WORDS IN TEXT:", self.words_in_text)?;
        writeln!(f, "{:<22}{:.2}", "TIME IN load:", t.load)?;
        writeln!(f, "{:<22}{:.2}", "TIME IN check:", t.check)?;
        writeln!(f, "{:<22}{:.2}", "TIME IN size:", t.size)?;
        writeln!(f, "{:<22}{:.2}", "TIME IN unload:", t.unload)?;
        writeln!(f, "{:<22}{:.2}", "TIME IN TOTAL:", t.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            misspelled: vec!["nott".into(), "caterpilar".into()],
            words_misspelled: 2,
            words_in_dictionary: 143_091,
            words_in_text: 6,
            timings: Timings::new(
                Duration::from_millis(1_250),
                Duration::from_millis(10),
                Duration::ZERO,
                Duration::from_millis(40),
            ),
        }
    }

    #[test]
    fn summary_layout() {
        let expected = "\
WORDS MISSPELLED:     2
WORDS IN DICTIONARY:  143091
WORDS IN TEXT:        6
TIME IN load:         1.25
TIME IN check:        0.01
TIME IN size:         0.00
TIME IN unload:       0.04
TIME IN TOTAL:        1.30
";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn misspellings_block() {
        assert_eq!(sample().misspellings(), "\nMISSPELLED WORDS\n\nnott\ncaterpilar\n");
    }

    #[test]
    fn serializes_to_json() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["words_misspelled"], 2);
        assert_eq!(value["words_in_dictionary"], 143_091);
        assert_eq!(value["misspelled"][1], "caterpilar");
        assert_eq!(value["timings"]["load"], 1.25);
    }
}
