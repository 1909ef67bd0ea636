//! Splitting a single line into fields

use crate::error::{CsvLineError, Result};

/// Characters that open and close a quoted span
pub const QUOTE_CHARS: [char; 2] = ['\'', '"'];

/// How the quoted spans of a tokenized line ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    /// Every opened quote was closed, or quotes were not interpreted
    Balanced,
    /// A span opened by this quote character ran to the end of the line
    Unterminated(char),
}

/// Splits lines into tokens on any character of a delimiter set
///
/// With quote parsing enabled, a field wrapped in matching `'` or `"`
/// characters may contain delimiters. The quotes themselves are dropped.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiters: Vec<char>,
    parse_quotes: bool,
}

impl Tokenizer {
    /// Create a tokenizer splitting on every character of `delimiters`
    ///
    /// Quote parsing is enabled by default.
    pub fn new(delimiters: &str) -> Result<Self> {
        Ok(Self {
            delimiters: Self::delimiter_set(delimiters)?,
            parse_quotes: true,
        })
    }

    fn delimiter_set(delimiters: &str) -> Result<Vec<char>> {
        let mut set: Vec<char> = Vec::new();
        for ch in delimiters.chars() {
            if !set.contains(&ch) {
                set.push(ch);
            }
        }
        if set.is_empty() {
            return Err(CsvLineError::EmptyDelimiters);
        }
        Ok(set)
    }

    /// Replace the delimiter set
    pub fn set_delimiters(&mut self, delimiters: &str) -> Result<()> {
        self.delimiters = Self::delimiter_set(delimiters)?;
        Ok(())
    }

    /// Enable or disable quote-aware splitting
    pub fn set_parse_quotes(&mut self, parse_quotes: bool) {
        self.parse_quotes = parse_quotes;
    }

    /// Current delimiter set, in first-seen order
    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }

    /// Whether quote-aware splitting is enabled
    pub fn parses_quotes(&self) -> bool {
        self.parse_quotes
    }

    #[inline]
    fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(&ch)
    }

    /// Split `line` into fields, appending them to `tokens`
    ///
    /// - A line without any delimiter becomes a single token.
    /// - Without quote parsing, or when the line holds no quote character,
    ///   every delimiter ends a field: N delimiters give N+1 fields.
    /// - Otherwise delimiters inside a quoted span are kept as text. An
    ///   unterminated span extends to the end of the line and is reported
    ///   through the returned [`Quoting`].
    pub fn tokenize(&self, line: &str, tokens: &mut Vec<String>) -> Quoting {
        if !line.contains(|c: char| self.is_delimiter(c)) {
            tokens.push(line.to_string());
            return Quoting::Balanced;
        }

        if !self.parse_quotes || !line.contains(QUOTE_CHARS) {
            tokens.extend(line.split(|c: char| self.is_delimiter(c)).map(str::to_string));
            return Quoting::Balanced;
        }

        self.tokenize_quoted(line, tokens)
    }

    fn tokenize_quoted(&self, line: &str, tokens: &mut Vec<String>) -> Quoting {
        let mut field = String::new();
        let mut open_quote: Option<char> = None;

        for ch in line.chars() {
            match open_quote {
                Some(quote) if ch == quote => open_quote = None,
                Some(_) => field.push(ch),
                None if QUOTE_CHARS.contains(&ch) => open_quote = Some(ch),
                None if self.is_delimiter(ch) => tokens.push(std::mem::take(&mut field)),
                None => field.push(ch),
            }
        }
        tokens.push(field);

        match open_quote {
            Some(quote) => Quoting::Unterminated(quote),
            None => Quoting::Balanced,
        }
    }
}

/// Trim leading and trailing whitespace from every token in place
///
/// Empty tokens are left alone, and whitespace inside a token is kept.
pub fn trim_tokens(tokens: &mut [String]) {
    for token in tokens.iter_mut() {
        if token.is_empty() {
            continue;
        }
        let trimmed = token.trim();
        if trimmed.len() != token.len() {
            *token = trimmed.to_string();
        }
    }
}
