//! CSV/TSV import using the csv crate
//!
//! RFC 4180 compliant parsing with support for quoted fields,
//! escaped quotes, ragged rows and custom delimiters. The first record
//! becomes the header row.

use std::io::Cursor;

use super::ImportError;
use crate::table::TabularData;

/// Supported field delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

/// Parse delimited text into headers and rows
pub fn parse_delimited(content: &str, delimiter: Delimiter) -> Result<TabularData, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.char() as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(content.as_bytes()));

    let mut records: Vec<Vec<String>> = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ImportError::Csv {
            record: index + 1,
            message: e.to_string(),
        })?;
        records.push(record.iter().map(|s| s.to_string()).collect());
    }

    let mut records = records.into_iter();
    let Some(headers) = records.next() else {
        return Ok(TabularData::default());
    };

    Ok(TabularData {
        headers,
        rows: records.collect(),
    })
}

/// Detect delimiter by analyzing first few lines
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    if max == 0 {
        return Delimiter::Comma;
    }

    if tab_count == max {
        Delimiter::Tab
    } else if pipe_count == max {
        Delimiter::Pipe
    } else if semi_count == max {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let data = parse_delimited("a,b,c\n1,2,3\n", Delimiter::Comma).unwrap();

        assert_eq!(data.headers, vec!["a", "b", "c"]);
        assert_eq!(data.rows, vec![vec!["1", "2", "3"]]);
    }

    #[test]
    fn test_parse_quoted_fields() {
        let content = r#""hello, world","test"
"with ""quotes""","normal"
"#;
        let data = parse_delimited(content, Delimiter::Comma).unwrap();

        assert_eq!(data.headers[0], "hello, world");
        assert_eq!(data.rows[0][0], "with \"quotes\"");
    }

    #[test]
    fn test_parse_tsv() {
        let data = parse_delimited("a\tb\tc\n1\t2\t3\n", Delimiter::Tab).unwrap();

        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.headers[1], "b");
    }

    #[test]
    fn test_parse_ragged_rows() {
        let data = parse_delimited("a,b,c\n1,2\n", Delimiter::Comma).unwrap();
        assert_eq!(data.rows[0], vec!["1", "2"]);
    }

    #[test]
    fn test_parse_empty() {
        let data = parse_delimited("", Delimiter::Comma).unwrap();
        assert!(data.headers.is_empty());
        assert!(data.rows.is_empty());
    }

    #[test]
    fn test_detect_delimiter_comma() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3\n"), Delimiter::Comma);
    }

    #[test]
    fn test_detect_delimiter_tab() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3\n"), Delimiter::Tab);
    }

    #[test]
    fn test_detect_delimiter_pipe() {
        assert_eq!(detect_delimiter("a|b|c\n1|2|3\n"), Delimiter::Pipe);
    }

    #[test]
    fn test_detect_delimiter_semicolon() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3\n"), Delimiter::Semicolon);
    }

    #[test]
    fn test_delimiter_from_extension() {
        assert_eq!(Delimiter::from_extension("csv"), Delimiter::Comma);
        assert_eq!(Delimiter::from_extension("TSV"), Delimiter::Tab);
        assert_eq!(Delimiter::from_extension("psv"), Delimiter::Pipe);
    }
}
