//! Type definitions for tables, options and inferred values

use crate::error::{CsvError, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One parsed row: an ordered sequence of field texts
pub type Record = Vec<String>;

/// Single-character field separator
///
/// Construction rejects characters that would make the grammar ambiguous:
/// the quote character and line terminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "char", into = "char"))]
pub struct Delimiter(char);

impl Delimiter {
    /// Comma, the default
    pub const COMMA: Delimiter = Delimiter(',');
    /// Semicolon, common in locales that use a decimal comma
    pub const SEMICOLON: Delimiter = Delimiter(';');
    /// Tab, for TSV
    pub const TAB: Delimiter = Delimiter('\t');
    /// Pipe
    pub const PIPE: Delimiter = Delimiter('|');

    /// Create a delimiter from a single character
    pub fn new(ch: char) -> Result<Self> {
        match ch {
            '"' | '\n' | '\r' => Err(CsvError::InvalidDelimiter(format!("{:?}", ch))),
            _ => Ok(Delimiter(ch)),
        }
    }

    /// Get the delimiter character
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::COMMA
    }
}

impl TryFrom<char> for Delimiter {
    type Error = CsvError;

    fn try_from(ch: char) -> Result<Self> {
        Delimiter::new(ch)
    }
}

/// Parses delimiter text typed into a form field; `"\t"` spelled out is accepted
impl TryFrom<&str> for Delimiter {
    type Error = CsvError;

    fn try_from(s: &str) -> Result<Self> {
        if s == "\\t" {
            return Ok(Delimiter::TAB);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Delimiter::new(ch),
            _ => Err(CsvError::InvalidDelimiter(format!("{:?}", s))),
        }
    }
}

impl From<Delimiter> for char {
    fn from(d: Delimiter) -> Self {
        d.0
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options shared by the table builder, serializer and JSON conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CsvOptions {
    /// Field separator (default: `,`)
    pub delimiter: Delimiter,
    /// Treat the first non-blank record as column names (default: true)
    pub has_header: bool,
    /// Run loose type inference when converting to JSON (default: false)
    pub infer_types: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: Delimiter::COMMA,
            has_header: true,
            infer_types: false,
        }
    }
}

impl CsvOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field separator
    pub fn delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether the first record is a header
    pub fn has_header(mut self, has: bool) -> Self {
        self.has_header = has;
        self
    }

    /// Set whether JSON conversion infers numbers, booleans and nulls
    pub fn infer_types(mut self, infer: bool) -> Self {
        self.infer_types = infer;
        self
    }
}

/// A header plus records, built per user action and then discarded
///
/// Rows are not required to match the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    /// Column names; empty when the input had no header
    pub header: Vec<String>,
    /// Data rows
    pub records: Vec<Record>,
}

impl Table {
    /// Create a table with a header
    pub fn new(header: Vec<String>, records: Vec<Record>) -> Self {
        Table { header, records }
    }

    /// Create a table without a header
    pub fn without_header(records: Vec<Record>) -> Self {
        Table {
            header: Vec::new(),
            records,
        }
    }

    /// Check if the table carries column names
    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }

    /// Number of data rows (header excluded)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if there are no data rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Widest row, counting the header
    pub fn width(&self) -> usize {
        self.records
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    /// Get field at row/column, if the row is long enough
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.records
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }

    /// Position of a named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// All values of a named column; short rows yield `None`
    pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let idx = self.column_index(name)?;
        Some(
            self.records
                .iter()
                .map(|r| r.get(idx).map(String::as_str))
                .collect(),
        )
    }

    /// Check if every row has exactly the header's width
    ///
    /// Always true for tables without a header.
    pub fn is_rectangular(&self) -> bool {
        !self.has_header() || self.records.iter().all(|r| r.len() == self.header.len())
    }

    /// Pad short rows (and the header) with empty fields up to `width()`
    ///
    /// Long rows are kept as they are.
    pub fn pad_rows(&mut self) {
        let width = self.width();
        if self.has_header() {
            self.header.resize(width, String::new());
        }
        for record in &mut self.records {
            if record.len() < width {
                record.resize(width, String::new());
            }
        }
    }
}

/// Loosely typed value produced from field text for JSON output
#[derive(Debug, Clone, PartialEq)]
pub enum InferredValue {
    /// Canonical numeric literal
    Number(f64),
    /// `true` / `false`, any case
    Bool(bool),
    /// `null`, any case
    Null,
    /// Anything else, unchanged
    Text(String),
}

impl InferredValue {
    /// Check if this is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, InferredValue::Null)
    }

    /// Try to get the numeric value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            InferredValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            InferredValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            InferredValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for InferredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferredValue::Number(n) => write!(f, "{}", n),
            InferredValue::Bool(b) => write!(f, "{}", b),
            InferredValue::Null => write!(f, "null"),
            InferredValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for InferredValue {
    fn from(s: &str) -> Self {
        InferredValue::Text(s.to_string())
    }
}

impl From<f64> for InferredValue {
    fn from(n: f64) -> Self {
        InferredValue::Number(n)
    }
}

impl From<bool> for InferredValue {
    fn from(b: bool) -> Self {
        InferredValue::Bool(b)
    }
}
