//! Line-at-a-time reading with physical line counting

use std::io::{self, BufRead};

/// Reads stripped lines from a buffered stream
///
/// Each call consumes exactly one physical line. Trailing `\r` and `\n`
/// characters are removed, so files with `\n`, `\r\n` or stray `\r\r\n`
/// endings all read the same. Bytes that are not valid UTF-8 are replaced
/// rather than failing the read.
pub struct LineSource<R> {
    inner: R,
    buffer: Vec<u8>,
    line_number: usize,
    exhausted: bool,
}

impl<R: BufRead> LineSource<R> {
    /// Wrap a buffered stream
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: Vec::with_capacity(1024),
            line_number: 0,
            exhausted: false,
        }
    }

    /// Read the next line into `line`, replacing its contents
    ///
    /// Returns `Ok(false)` once the stream is exhausted. A read error is
    /// returned once and also ends the stream. After that every call
    /// returns `Ok(false)` without touching the stream again.
    pub fn next_line(&mut self, line: &mut String) -> io::Result<bool> {
        line.clear();
        if self.exhausted {
            return Ok(false);
        }

        self.buffer.clear();
        match self.inner.read_until(b'\n', &mut self.buffer) {
            Ok(0) => {
                self.exhausted = true;
                return Ok(false);
            }
            Ok(_) => {}
            Err(e) => {
                // Part of the line may already be consumed; resuming would
                // hand out its tail as a line of its own.
                self.exhausted = true;
                return Err(e);
            }
        }
        self.line_number += 1;

        let end = self
            .buffer
            .iter()
            .rposition(|&b| b != b'\n' && b != b'\r')
            .map_or(0, |pos| pos + 1);
        line.push_str(&String::from_utf8_lossy(&self.buffer[..end]));
        Ok(true)
    }

    /// Number of lines consumed so far (the 1-based number of the last line read)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Whether the end of the stream has been reached
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Get a reference to the underlying stream
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap the underlying stream
    pub fn into_inner(self) -> R {
        self.inner
    }
}
