//! Integration tests for csvline

use csvline::{CsvLineError, CsvReader, CsvRow, ReadStatus, ReaderConfig};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(contents.as_bytes()).unwrap();
    temp.flush().unwrap();
    temp
}

#[test]
fn test_read_file_with_comments_and_blanks() {
    let temp = write_temp(
        "# platform list\r\n\
         # name,lat,lon\r\n\
         \r\n\
         alpha,38.8,-77.0\r\n\
         \r\n\
         \"bravo, two\",39.1,-76.5\r\n",
    );

    let mut reader = CsvReader::open(temp.path(), ",").unwrap();
    let mut tokens = Vec::new();

    assert_eq!(reader.read_line(&mut tokens, true), ReadStatus::Success);
    assert_eq!(tokens, vec!["alpha", "38.8", "-77.0"]);
    assert_eq!(reader.line_number(), 4);

    assert_eq!(reader.read_line(&mut tokens, true), ReadStatus::Success);
    assert_eq!(tokens, vec!["bravo, two", "39.1", "-76.5"]);
    assert_eq!(reader.line_number(), 6);

    assert_eq!(reader.read_line(&mut tokens, true), ReadStatus::EndOfInput);
    assert!(tokens.is_empty());
    assert_eq!(reader.line_number(), 6);
}

#[test]
fn test_counter_after_comments_and_blank_lines() {
    let input = "# a\n# b\n# c\n\n\nx,y\n";
    let mut reader = CsvReader::new(Cursor::new(input), ",").unwrap();
    let mut tokens = Vec::new();

    assert_eq!(reader.read_line(&mut tokens, true), ReadStatus::Success);
    assert_eq!(tokens, vec!["x", "y"]);
    assert_eq!(reader.line_number(), 6);
}

#[test]
fn test_trailing_comments_counted_at_end_of_input() {
    let input = "x\n# done\n\n";
    let mut reader = CsvReader::new(Cursor::new(input), ",").unwrap();
    let mut tokens = Vec::new();

    assert_eq!(reader.read_line(&mut tokens, true), ReadStatus::Success);
    assert_eq!(reader.read_line(&mut tokens, true), ReadStatus::EndOfInput);
    assert_eq!(reader.line_number(), 3);
    assert_eq!(reader.read_line(&mut tokens, true), ReadStatus::EndOfInput);
    assert_eq!(reader.line_number(), 3);
}

#[test]
fn test_examples_from_documentation() {
    let input = "a,\"b,c\",d\na,b,,d\n";
    let mut reader = CsvReader::new(Cursor::new(input), ",").unwrap();
    let mut tokens = Vec::new();

    reader.read_line(&mut tokens, true);
    assert_eq!(tokens, vec!["a", "b,c", "d"]);
    reader.read_line(&mut tokens, true);
    assert_eq!(tokens, vec!["a", "b", "", "d"]);
}

#[test]
fn test_trimmed_read() {
    let input = " a ,, b\n";
    let mut reader = CsvReader::new(Cursor::new(input), ",").unwrap();
    let mut tokens = Vec::new();

    assert_eq!(reader.read_line_trimmed(&mut tokens, true), ReadStatus::Success);
    assert_eq!(tokens, vec!["a", "", "b"]);
}

#[test]
fn test_whitespace_delimited_file() {
    let temp = write_temp("1 2\t3\n# ignored\n4  5\n");
    let mut reader = CsvReader::open(temp.path(), " \t").unwrap();

    let rows: Vec<CsvRow> = reader.rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].tokens, vec!["1", "2", "3"]);
    assert_eq!(rows[1].line_number, 3);
    // Consecutive delimiters are not merged
    assert_eq!(rows[1].tokens, vec!["4", "", "5"]);
}

#[test]
fn test_reader_from_config() {
    let config = ReaderConfig {
        trim: true,
        ..ReaderConfig::with_delimiters(";")
    };
    let temp = write_temp("name ; 'x;y' \n");
    let file = std::io::BufReader::new(std::fs::File::open(temp.path()).unwrap());
    let mut reader = CsvReader::from_config(file, &config).unwrap();

    let row = reader.rows().next().unwrap();
    assert_eq!(row.tokens, vec!["name", "x;y"]);
}

#[test]
fn test_empty_delimiters_rejected() {
    let result = CsvReader::new(Cursor::new(""), "");
    assert!(matches!(result, Err(CsvLineError::EmptyDelimiters)));
}

#[test]
fn test_large_file_streaming() {
    let mut contents = String::from("# generated\n");
    for i in 0..1000 {
        contents.push_str(&format!("{},{},\"note, {}\"\n", i, i * 2, i));
    }
    let temp = write_temp(&contents);

    let mut reader = CsvReader::open(temp.path(), ",").unwrap();
    let mut count = 0;
    for row in reader.rows() {
        assert_eq!(row.len(), 3);
        assert_eq!(row.line_number, count + 2);
        assert_eq!(row.get(2), Some(format!("note, {}", count).as_str()));
        count += 1;
    }
    assert_eq!(count, 1000);
    assert_eq!(reader.line_number(), 1001);
}
