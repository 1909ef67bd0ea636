// csvline - main.rs
//
// Command-line front end: tokenizes a file (or stdin) and prints one
// record per qualifying line, prefixed with its line number.

mod logging;

use clap::Parser;
use csvline::{CsvReader, ReaderConfig};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

type BoxError = Box<dyn std::error::Error>;

/// Tokenize delimited text files line by line.
#[derive(Parser, Debug)]
#[command(name = "csvline", version, about)]
struct Cli {
    /// Input file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Delimiter characters, any of which separates fields
    #[arg(short, long, default_value = ",")]
    delimiters: String,

    /// Treat quote characters as ordinary text
    #[arg(long)]
    no_quotes: bool,

    /// Comment marker character
    #[arg(short, long, default_value_t = '#')]
    comment: char,

    /// Report blank lines as empty records instead of skipping them
    #[arg(long)]
    keep_empty: bool,

    /// Trim leading and trailing whitespace from each token
    #[arg(short, long)]
    trim: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn config(&self) -> ReaderConfig {
        ReaderConfig {
            delimiters: self.delimiters.clone(),
            parse_quotes: !self.no_quotes,
            comment_char: self.comment,
            skip_empty_lines: !self.keep_empty,
            trim: self.trim,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let config = cli.config();
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    let result: Result<usize, BoxError> = match &cli.file {
        Some(path) => CsvReader::open_with_config(path, &config)
            .map_err(Into::into)
            .and_then(|reader| print_rows(reader, out)),
        None => CsvReader::from_config(io::stdin().lock(), &config)
            .map_err(Into::into)
            .and_then(|reader| print_rows(reader, out)),
    };

    match result {
        Ok(records) => {
            tracing::debug!(records, "Finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "csvline failed");
            ExitCode::FAILURE
        }
    }
}

/// Write every row as `<line_number>: [tokens...]`, returning the row count
fn print_rows<R: BufRead, W: Write>(
    mut reader: CsvReader<R>,
    mut out: W,
) -> Result<usize, BoxError> {
    let mut records = 0usize;
    for row in reader.rows() {
        writeln!(out, "{}: {:?}", row.line_number, row.tokens)?;
        records += 1;
    }
    out.flush()?;

    if let Some(e) = reader.take_io_error() {
        return Err(e.into());
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn render(input: &str, config: &ReaderConfig) -> String {
        let reader = CsvReader::from_config(Cursor::new(input), config).unwrap();
        let mut out = Vec::new();
        print_rows(reader, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_print_rows_format() {
        let output = render("# header\na,\"b,c\"\n\nd\n", &ReaderConfig::default());
        assert_eq!(output, "2: [\"a\", \"b,c\"]\n4: [\"d\"]\n");
    }

    #[test]
    fn test_cli_flags_map_to_config() {
        let cli = Cli::parse_from([
            "csvline",
            "-d",
            ";|",
            "--no-quotes",
            "-c",
            "%",
            "--keep-empty",
            "--trim",
        ]);
        let config = cli.config();
        assert_eq!(config.delimiters, ";|");
        assert!(!config.parse_quotes);
        assert_eq!(config.comment_char, '%');
        assert!(!config.skip_empty_lines);
        assert!(config.trim);
        assert!(cli.file.is_none());
    }
}
