//! Line reading and tokenizing building blocks

mod line_source;
mod tokenizer;

pub use line_source::LineSource;
pub use tokenizer::{trim_tokens, Quoting, Tokenizer, QUOTE_CHARS};

/// Comment marker used unless the reader is configured otherwise
pub const DEFAULT_COMMENT_CHAR: char = '#';
