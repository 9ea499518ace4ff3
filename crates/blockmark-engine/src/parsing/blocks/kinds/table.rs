use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{cursor::LineCursor, text::Text};

/// Horizontal alignment of a table column, taken from the delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Unspecified,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: Text,
    pub alignment: Alignment,
}

/// A pipe table: a header row, a delimiter row, then body rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<Column>,
    /// Body rows, each holding exactly one cell per column.
    pub rows: Vec<Vec<Text>>,
}

fn delimiter_cell_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^:?-+:?$").expect("Invalid table delimiter regex"))
}

/// Splits a row into trimmed cells; outer pipes are optional.
fn split_row(line: &str) -> Vec<&str> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    line.split('|').map(str::trim).collect()
}

fn is_row(line: &str) -> bool {
    line.contains('|') && !line.trim().is_empty()
}

fn parse_alignment(cell: &str) -> Option<Alignment> {
    if !delimiter_cell_regex().is_match(cell) {
        return None;
    }
    let alignment = match (cell.starts_with(':'), cell.ends_with(':')) {
        (true, true) => Alignment::Center,
        (true, false) => Alignment::Left,
        (false, true) => Alignment::Right,
        (false, false) => Alignment::Unspecified,
    };
    Some(alignment)
}

impl Table {
    /// Parses a table whose header row is the current line.
    ///
    /// The delimiter row is inspected by lookahead, so nothing is consumed
    /// unless both rows match. Short body rows are padded with empty cells,
    /// long ones truncated.
    pub fn parse(cursor: &mut LineCursor<'_>) -> Option<Self> {
        let header = cursor.current()?;
        let delimiter = cursor.peek(1)?;
        if !is_row(header) || !is_row(delimiter) {
            return None;
        }

        let headers = split_row(header);
        let alignments = split_row(delimiter)
            .into_iter()
            .map(parse_alignment)
            .collect::<Option<Vec<_>>>()?;
        if alignments.len() != headers.len() {
            return None;
        }

        cursor.advance();
        cursor.advance();

        let columns = headers
            .into_iter()
            .zip(alignments)
            .map(|(header, alignment)| Column {
                header: Text::new(header),
                alignment,
            })
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        while let Some(line) = cursor.current().filter(|line| is_row(line)) {
            cursor.advance();
            let mut cells = split_row(line)
                .into_iter()
                .map(Text::new)
                .collect::<Vec<_>>();
            cells.resize(columns.len(), Text::default());
            rows.push(cells);
        }

        Some(Self { columns, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cell_strings(row: &[Text]) -> Vec<&str> {
        row.iter().map(Text::as_str).collect()
    }

    #[test]
    fn parses_table_with_alignment() {
        let mut cursor = LineCursor::new(
            "| a | b | c | d |\n|---|:--|:-:|--:|\n| 1 | 2 | 3 | 4 |\n\nafter",
        );
        let table = Table::parse(&mut cursor).unwrap();

        let alignments: Vec<_> = table.columns.iter().map(|c| c.alignment).collect();
        assert_eq!(
            alignments,
            [
                Alignment::Unspecified,
                Alignment::Left,
                Alignment::Center,
                Alignment::Right
            ]
        );
        assert_eq!(table.columns[1].header.as_str(), "b");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(cell_strings(&table.rows[0]), ["1", "2", "3", "4"]);
        assert_eq!(cursor.current(), Some(""));
    }

    #[test]
    fn outer_pipes_are_optional() {
        let mut cursor = LineCursor::new("a | b\n--- | ---\nx | y");
        let table = Table::parse(&mut cursor).unwrap();
        assert_eq!(table.columns.len(), 2);
        assert_eq!(cell_strings(&table.rows[0]), ["x", "y"]);
    }

    #[test]
    fn rows_are_padded_and_truncated() {
        let mut cursor = LineCursor::new("| a | b |\n|---|---|\n| 1 |\n| 1 | 2 | 3 |");
        let table = Table::parse(&mut cursor).unwrap();
        assert_eq!(cell_strings(&table.rows[0]), ["1", ""]);
        assert_eq!(cell_strings(&table.rows[1]), ["1", "2"]);
    }

    #[test]
    fn body_ends_at_line_without_pipe() {
        let mut cursor = LineCursor::new("| a |\n|---|\n| 1 |\nplain");
        let table = Table::parse(&mut cursor).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(cursor.current(), Some("plain"));
    }

    #[rstest]
    #[case::no_delimiter_row("| a | b |\n| c | d |")]
    #[case::column_count_mismatch("| a | b |\n|---|")]
    #[case::header_only("| a | b |")]
    #[case::no_pipes("a\n---")]
    #[case::bad_delimiter("| a |\n|-x-|")]
    fn rejects_non_tables(#[case] source: &str) {
        let mut cursor = LineCursor::new(source);
        assert_eq!(Table::parse(&mut cursor), None);
        assert_eq!(cursor.position(), 0);
    }
}
