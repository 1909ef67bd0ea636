//! Line-oriented CSV reading with comment and blank-line handling

use crate::csv::{trim_tokens, LineSource, Quoting, Tokenizer, DEFAULT_COMMENT_CHAR};
use crate::error::{CsvLineError, Result};
use crate::types::{CsvRow, ReadStatus, ReaderConfig};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// CSV reader that tokenizes one qualifying line per call
///
/// Lines starting with the comment marker are always skipped. Blank lines
/// are skipped or reported as empty token lists depending on the
/// `skip_empty_lines` argument. The reader counts every physical line it
/// consumes, so [`line_number`](Self::line_number) can be used for
/// diagnostics.
///
/// The reader takes any [`BufRead`]. Pass `&mut stream` to keep ownership
/// of the stream on the caller side.
///
/// # Examples
///
/// ```
/// use csvline::{CsvReader, ReadStatus};
/// use std::io::Cursor;
///
/// let input = "# header comment\na,\"b,c\",d\n";
/// let mut reader = CsvReader::new(Cursor::new(input), ",").unwrap();
///
/// let mut tokens = Vec::new();
/// assert_eq!(reader.read_line(&mut tokens, true), ReadStatus::Success);
/// assert_eq!(tokens, vec!["a", "b,c", "d"]);
/// assert_eq!(reader.line_number(), 2);
///
/// assert_eq!(reader.read_line(&mut tokens, true), ReadStatus::EndOfInput);
/// assert!(tokens.is_empty());
/// ```
pub struct CsvReader<R> {
    source: LineSource<R>,
    tokenizer: Tokenizer,
    comment_char: char,
    line_buffer: String,
    io_error: Option<io::Error>,

    // Used by rows()
    skip_empty_lines: bool,
    trim: bool,
}

impl CsvReader<BufReader<File>> {
    /// Open a file for reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvline::CsvReader;
    ///
    /// let mut reader = CsvReader::open("tracks.csv", ",").unwrap();
    /// for row in reader.rows() {
    ///     println!("{}: {:?}", row.line_number, row.tokens);
    /// }
    /// ```
    pub fn open<P: AsRef<Path>>(path: P, delimiters: &str) -> Result<Self> {
        Self::new(open_file(path.as_ref())?, delimiters)
    }

    /// Open a file for reading with settings from a [`ReaderConfig`]
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: &ReaderConfig) -> Result<Self> {
        Self::from_config(open_file(path.as_ref())?, config)
    }
}

fn open_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| CsvLineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

impl<R: BufRead> CsvReader<R> {
    /// Create a reader splitting on any character of `delimiters`
    ///
    /// Quote parsing is enabled and the comment marker is `#`.
    pub fn new(stream: R, delimiters: &str) -> Result<Self> {
        Ok(CsvReader {
            source: LineSource::new(stream),
            tokenizer: Tokenizer::new(delimiters)?,
            comment_char: DEFAULT_COMMENT_CHAR,
            line_buffer: String::with_capacity(1024),
            io_error: None,
            skip_empty_lines: true,
            trim: false,
        })
    }

    /// Create a reader from a [`ReaderConfig`]
    pub fn from_config(stream: R, config: &ReaderConfig) -> Result<Self> {
        let reader = Self::new(stream, &config.delimiters)?
            .parse_quotes(config.parse_quotes)
            .comment_char(config.comment_char)
            .skip_empty_lines(config.skip_empty_lines)
            .trim(config.trim);
        Ok(reader)
    }

    /// Enable or disable quote-aware splitting (builder pattern)
    pub fn parse_quotes(mut self, parse_quotes: bool) -> Self {
        self.set_parse_quotes(parse_quotes);
        self
    }

    /// Set the comment marker (builder pattern)
    pub fn comment_char(mut self, comment_char: char) -> Self {
        self.set_comment_char(comment_char);
        self
    }

    /// Skip blank lines while iterating with [`rows`](Self::rows) (builder pattern)
    ///
    /// Defaults to `true`.
    pub fn skip_empty_lines(mut self, skip: bool) -> Self {
        self.skip_empty_lines = skip;
        self
    }

    /// Trim tokens while iterating with [`rows`](Self::rows) (builder pattern)
    ///
    /// Defaults to `false`.
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Enable or disable quote-aware splitting for subsequent reads
    pub fn set_parse_quotes(&mut self, parse_quotes: bool) {
        self.tokenizer.set_parse_quotes(parse_quotes);
    }

    /// Change the comment marker for subsequent reads
    pub fn set_comment_char(&mut self, comment_char: char) {
        self.comment_char = comment_char;
    }

    /// Replace the delimiter set for subsequent reads
    ///
    /// Fails with [`CsvLineError::EmptyDelimiters`] and keeps the current
    /// set when `delimiters` is empty.
    pub fn set_delimiters(&mut self, delimiters: &str) -> Result<()> {
        self.tokenizer.set_delimiters(delimiters)
    }

    /// Current delimiter set
    pub fn delimiters(&self) -> &[char] {
        self.tokenizer.delimiters()
    }

    /// Whether quote-aware splitting is enabled
    pub fn parses_quotes(&self) -> bool {
        self.tokenizer.parses_quotes()
    }

    /// Current comment marker
    pub fn comment_marker(&self) -> char {
        self.comment_char
    }

    /// Number of lines consumed so far, including skipped blank and comment lines
    pub fn line_number(&self) -> usize {
        self.source.line_number()
    }

    /// Read and tokenize the next qualifying line
    ///
    /// `tokens` is cleared first. Comment lines are always skipped. Blank
    /// lines are skipped when `skip_empty_lines` is true, otherwise the
    /// read stops there and succeeds with an empty `tokens`.
    ///
    /// Returns [`ReadStatus::EndOfInput`] with an empty `tokens` when the
    /// stream runs out. A stream error also ends the read this way; see
    /// [`take_io_error`](Self::take_io_error).
    pub fn read_line(&mut self, tokens: &mut Vec<String>, skip_empty_lines: bool) -> ReadStatus {
        tokens.clear();

        loop {
            match self.source.next_line(&mut self.line_buffer) {
                Ok(true) => {}
                Ok(false) => return ReadStatus::EndOfInput,
                Err(e) => {
                    tracing::warn!(
                        line = self.source.line_number() + 1,
                        error = %e,
                        "Stream error while reading, treating as end of input"
                    );
                    self.io_error = Some(e);
                    return ReadStatus::EndOfInput;
                }
            }

            let line = self.line_buffer.as_str();
            if line.is_empty() {
                if skip_empty_lines {
                    continue;
                }
                return ReadStatus::Success;
            }

            if line.starts_with(self.comment_char) {
                tracing::trace!(line = self.source.line_number(), "Skipping comment line");
                continue;
            }

            if let Quoting::Unterminated(quote) = self.tokenizer.tokenize(line, tokens) {
                tracing::warn!(
                    line = self.source.line_number(),
                    quote = %quote,
                    "Unterminated quote, field extends to end of line"
                );
            }
            return ReadStatus::Success;
        }
    }

    /// Like [`read_line`](Self::read_line), then trims whitespace from every token
    ///
    /// Empty tokens stay empty and whitespace inside a token is kept.
    pub fn read_line_trimmed(
        &mut self,
        tokens: &mut Vec<String>,
        skip_empty_lines: bool,
    ) -> ReadStatus {
        let status = self.read_line(tokens, skip_empty_lines);
        if status.is_success() {
            trim_tokens(tokens);
        }
        status
    }

    /// Take the stream error that ended the last read, if any
    ///
    /// Lets callers tell a failing stream apart from a finished one.
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }

    /// Get iterator over rows
    ///
    /// Honors the [`skip_empty_lines`](Self::skip_empty_lines) and
    /// [`trim`](Self::trim) settings. Iteration ends at end of input.
    pub fn rows(&mut self) -> CsvRowIterator<'_, R> {
        CsvRowIterator { reader: self }
    }

    /// Get a reference to the underlying stream
    pub fn get_ref(&self) -> &R {
        self.source.get_ref()
    }

    /// Unwrap the underlying stream
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }
}

/// Iterator over CSV rows
pub struct CsvRowIterator<'a, R> {
    reader: &'a mut CsvReader<R>,
}

impl<R: BufRead> Iterator for CsvRowIterator<'_, R> {
    type Item = CsvRow;

    fn next(&mut self) -> Option<Self::Item> {
        let mut tokens = Vec::new();
        let skip = self.reader.skip_empty_lines;
        let status = if self.reader.trim {
            self.reader.read_line_trimmed(&mut tokens, skip)
        } else {
            self.reader.read_line(&mut tokens, skip)
        };

        match status {
            ReadStatus::Success => Some(CsvRow {
                line_number: self.reader.line_number(),
                tokens,
            }),
            ReadStatus::EndOfInput => None,
        }
    }
}
