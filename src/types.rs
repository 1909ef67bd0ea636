//! Type definitions shared by the reader and tokenizer

use std::fmt;

/// Outcome of a single read call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadStatus {
    /// A qualifying line was found; the token list holds its fields
    Success,
    /// The stream ran out before any qualifying line was found
    EndOfInput,
}

impl ReadStatus {
    /// Whether the read produced a line
    pub fn is_success(&self) -> bool {
        matches!(self, ReadStatus::Success)
    }

    /// Whether the stream is exhausted
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, ReadStatus::EndOfInput)
    }
}

impl fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadStatus::Success => write!(f, "success"),
            ReadStatus::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// One tokenized line together with the line number it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// 1-based physical line number in the source stream
    pub line_number: usize,
    /// Fields of the line, left to right
    pub tokens: Vec<String>,
}

impl CsvRow {
    /// Number of fields in the row
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the row has no fields (a blank line that was not skipped)
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a field by index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }
}

/// Reader configuration as plain data
///
/// Useful when the reader settings come from a settings file. With the
/// `serde` feature enabled the struct can be (de)serialized directly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderConfig {
    /// Characters that separate fields
    pub delimiters: String,
    /// Honor `'` and `"` quoted spans
    pub parse_quotes: bool,
    /// Lines starting with this character are never tokenized
    pub comment_char: char,
    /// Skip blank lines instead of reporting them as empty rows
    pub skip_empty_lines: bool,
    /// Trim leading and trailing whitespace from each token
    pub trim: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiters: ",".to_string(),
            parse_quotes: true,
            comment_char: crate::csv::DEFAULT_COMMENT_CHAR,
            skip_empty_lines: true,
            trim: false,
        }
    }
}

impl ReaderConfig {
    /// Create a configuration with the given delimiter set and defaults otherwise
    pub fn with_delimiters(delimiters: impl Into<String>) -> Self {
        Self {
            delimiters: delimiters.into(),
            ..Self::default()
        }
    }
}
