//! # csvline
//!
//! Line-oriented CSV tokenizing for configuration and track-data files.
//!
//! Each read call consumes lines from a buffered stream until it finds one
//! worth tokenizing, then splits it on any character of a delimiter set.
//!
//! ## Features
//!
//! - Multi-character delimiter sets (`",;"` splits on both)
//! - Optional quote-aware splitting with `'` and `"`
//! - Comment lines (`#` by default) and blank lines skipped
//! - Physical line counting for line-accurate diagnostics
//! - Optional whitespace trimming of tokens
//!
//! ## Quick Start
//!
//! ```
//! use csvline::{CsvReader, ReadStatus};
//! use std::io::Cursor;
//!
//! let data = "# name, speed\nalpha, 12.5\n\nbravo, 7\n";
//! let mut reader = CsvReader::new(Cursor::new(data), ",").unwrap();
//!
//! let mut tokens = Vec::new();
//! while reader.read_line_trimmed(&mut tokens, true) == ReadStatus::Success {
//!     println!("line {}: {:?}", reader.line_number(), tokens);
//! }
//! assert_eq!(reader.line_number(), 4);
//! ```

pub mod csv;
pub mod csv_reader;
pub mod error;
pub mod types;

pub use csv_reader::{CsvReader, CsvRowIterator};
pub use error::{CsvLineError, Result};
pub use types::{CsvRow, ReadStatus, ReaderConfig};
