//! Markdown table parsing

use crate::table::{Alignment, Table};

/// Error type for Markdown table parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Fewer than two non-blank lines: no header and delimiter row
    #[error("a Markdown table needs a header line and a delimiter line (found {found} non-blank line(s))")]
    MissingDelimiter { found: usize },
}

/// Parse Markdown table text into a [`Table`]
///
/// The first non-blank line is the header, the second the delimiter row,
/// the rest are data rows. Row lengths are kept as written; callers treat
/// missing cells as empty.
pub fn parse(text: &str) -> Result<Table, FormatError> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(FormatError::MissingDelimiter { found: lines.len() });
    }

    let headers = parse_row(lines[0]);
    let alignments = parse_row(lines[1])
        .iter()
        .map(|cell| Alignment::from_delimiter(cell))
        .collect();
    let rows = lines[2..].iter().map(|line| parse_row(line)).collect();

    Ok(Table {
        headers,
        rows,
        alignments,
        column_widths: None,
    })
}

/// Whether `text` parses as a table
pub fn validate(text: &str) -> bool {
    parse(text).is_ok()
}

/// Split one table line into trimmed cells
///
/// One leading and one trailing pipe are optional. `\|` is a literal pipe
/// inside a cell.
pub fn parse_row(line: &str) -> Vec<String> {
    let mut body = line.trim();
    if let Some(rest) = body.strip_prefix('|') {
        body = rest;
    }
    if body.ends_with('|') && !body.ends_with("\\|") {
        body = &body[..body.len() - 1];
    }

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                current.push('|');
                chars.next();
            }
            '|' => cells.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    cells.push(current);

    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_simple_table() {
        let table = parse("| A | B |\n| --- | :---: |\n| 1 | 2 |").unwrap();

        assert_eq!(table.headers, strings(&["A", "B"]));
        assert_eq!(table.rows, vec![strings(&["1", "2"])]);
        assert_eq!(table.alignments, vec![Alignment::Left, Alignment::Center]);
        assert!(table.column_widths.is_none());
    }

    #[test]
    fn test_parse_alignments() {
        let table = parse("a|b|c|d\n---|:---:|---:|:---").unwrap();
        assert_eq!(
            table.alignments,
            vec![
                Alignment::Left,
                Alignment::Center,
                Alignment::Right,
                Alignment::Left
            ]
        );
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_parse_without_outer_pipes_and_extra_spaces() {
        let table = parse("  Name   |Age  \n ---|---  \n  Ann |  31 ").unwrap();
        assert_eq!(table.headers, strings(&["Name", "Age"]));
        assert_eq!(table.rows, vec![strings(&["Ann", "31"])]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let table = parse("\n\n| A |\n\n| --- |\n   \n| x |\n\n").unwrap();
        assert_eq!(table.headers, strings(&["A"]));
        assert_eq!(table.rows, vec![strings(&["x"])]);
    }

    #[test]
    fn test_parse_keeps_ragged_rows() {
        let table = parse("| A | B |\n| --- | --- |\n| 1 |\n| 1 | 2 | 3 |").unwrap();
        assert_eq!(table.rows[0], strings(&["1"]));
        assert_eq!(table.rows[1], strings(&["1", "2", "3"]));
    }

    #[test]
    fn test_parse_empty_cells() {
        let table = parse("| A | B |\n| --- | --- |\n|  |  |").unwrap();
        assert_eq!(table.rows, vec![strings(&["", ""])]);
    }

    #[test]
    fn test_parse_escaped_pipe() {
        let table = parse("| a \\| b | c |\n| --- | --- |").unwrap();
        assert_eq!(table.headers, strings(&["a | b", "c"]));
    }

    #[test]
    fn test_parse_requires_two_lines() {
        assert_eq!(
            parse(""),
            Err(FormatError::MissingDelimiter { found: 0 })
        );
        assert_eq!(
            parse("| A | B |\n\n"),
            Err(FormatError::MissingDelimiter { found: 1 })
        );
    }

    #[test]
    fn test_validate() {
        assert!(validate("| A |\n| --- |"));
        assert!(!validate("just a sentence"));
        assert!(!validate("   \n  "));
    }

    #[test]
    fn test_parse_row_single_pipe() {
        assert_eq!(parse_row("|"), strings(&[""]));
        assert_eq!(parse_row("||"), strings(&[""]));
        assert_eq!(parse_row("a"), strings(&["a"]));
    }
}
