//! Markdown field table parser
//!
//! The first line of a table is the header: its cells are mapped to
//! canonical column keys by position. Every further line is a data row and
//! must have exactly as many cells as the header. Markdown separator rows
//! (`---|---`) are dropped.

use crate::data::constants::{CELL_DELIMITER, SEPARATOR_PREFIX};
use crate::data::headers::{lookup_header, ColumnKey};
use crate::utils::error::{ConversionError, ConversionResult};

/// Parsed header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Trimmed header labels, in column order
    pub labels: Vec<String>,
    /// Canonical key per column, `None` for unrecognised labels
    pub columns: Vec<Option<ColumnKey>>,
}

impl Header {
    /// Parse a header line
    pub fn parse(line: &str) -> Self {
        let labels: Vec<String> = line
            .split(CELL_DELIMITER)
            .map(|cell| cell.trim().to_string())
            .collect();
        let columns = labels.iter().map(|label| lookup_header(label)).collect();
        Self { labels, columns }
    }

    /// Number of cells (including empty edge cells of `| a | b |`)
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Non-empty labels that did not map to a column key
    pub fn unknown_labels(&self) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .zip(&self.columns)
            .filter(|(label, key)| key.is_none() && !label.is_empty())
            .map(|(label, _)| label.as_str())
    }
}

/// One data row of the table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub name: Option<String>,
    pub type_token: Option<String>,
    pub content: Option<String>,
    pub not_null: Option<String>,
    pub comment: Option<String>,
}

impl Row {
    /// Store a cell; a later column with the same key overwrites an earlier one
    pub fn set(&mut self, key: ColumnKey, value: String) {
        let slot = match key {
            ColumnKey::Name => &mut self.name,
            ColumnKey::Type => &mut self.type_token,
            ColumnKey::Content => &mut self.content,
            ColumnKey::NotNull => &mut self.not_null,
            ColumnKey::Comment => &mut self.comment,
        };
        *slot = Some(value);
    }

    pub fn get(&self, key: ColumnKey) -> Option<&str> {
        match key {
            ColumnKey::Name => self.name.as_deref(),
            ColumnKey::Type => self.type_token.as_deref(),
            ColumnKey::Content => self.content.as_deref(),
            ColumnKey::NotNull => self.not_null.as_deref(),
            ColumnKey::Comment => self.comment.as_deref(),
        }
    }

    /// Raw field name, empty when absent
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Raw type token, empty when absent
    pub fn type_token(&self) -> &str {
        self.type_token.as_deref().unwrap_or("")
    }
}

/// Outcome of parsing one data line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Row(Row),
    /// Markdown header separator, carries no data
    Separator,
}

/// Parse a data line against `header`.
///
/// `line_no` is only used for error reporting.
pub fn parse_row(header: &Header, line: &str, line_no: usize) -> ConversionResult<ParsedLine> {
    let cells: Vec<&str> = line.split(CELL_DELIMITER).collect();
    if cells.len() != header.len() {
        return Err(ConversionError::column_mismatch(
            line_no,
            header.len(),
            cells.len(),
        ));
    }

    let mut row = Row::default();
    for (cell, key) in cells.iter().zip(&header.columns) {
        let value = cell.trim();
        if value.starts_with(SEPARATOR_PREFIX) {
            return Ok(ParsedLine::Separator);
        }
        if let Some(key) = key {
            row.set(*key, value.to_string());
        }
    }

    Ok(ParsedLine::Row(row))
}

/// A fully parsed table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// `None` when no line was entered before the table ended
    pub header: Option<Header>,
    /// Data rows in input order
    pub rows: Vec<Row>,
}

/// Incremental, line-at-a-time table parser
#[derive(Debug, Default)]
pub struct TableParser {
    table: Table,
    line_no: usize,
    strip_backticks: bool,
}

impl TableParser {
    pub fn new(strip_backticks: bool) -> Self {
        Self {
            strip_backticks,
            ..Default::default()
        }
    }

    /// Feed one table line (header first, then data lines)
    pub fn push_line(&mut self, line: &str) -> ConversionResult<()> {
        self.line_no += 1;

        let cleaned;
        let line = if self.strip_backticks {
            cleaned = line.replace('`', "");
            cleaned.as_str()
        } else {
            line
        };

        match self.table.header {
            None => {
                self.table.header = Some(Header::parse(line));
            }
            Some(ref header) => {
                if let ParsedLine::Row(row) = parse_row(header, line, self.line_no)? {
                    self.table.rows.push(row);
                }
            }
        }
        Ok(())
    }

    /// Number of lines fed so far
    pub fn lines_seen(&self) -> usize {
        self.line_no
    }

    pub fn finish(self) -> Table {
        self.table
    }
}
