//! Table building: split text into records, drop blank lines, take the header

use crate::csv::CsvParser;
use crate::error::{CsvError, Result};
use crate::types::{CsvOptions, Delimiter, Record, Table};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BOM: char = '\u{feff}';

/// Build a table from raw delimited text
///
/// Records end at `\n` or `\r\n` outside quotes, so quoted fields may contain
/// line breaks. Blank and whitespace-only records are dropped. When
/// `options.has_header` is set, the first remaining record becomes the header.
///
/// Returns [`CsvError::EmptyInput`] when nothing but blank lines remain.
///
/// # Examples
///
/// ```
/// use csvcodec::{parse_table, CsvOptions};
///
/// let table = parse_table("name,age\n\nAlice,30\n", &CsvOptions::default()).unwrap();
/// assert_eq!(table.header, vec!["name", "age"]);
/// assert_eq!(table.records, vec![vec!["Alice", "30"]]);
/// ```
pub fn parse_table(text: &str, options: &CsvOptions) -> Result<Table> {
    let parser = CsvParser::new(options.delimiter);
    let mut records: Vec<Record> = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let (fields, used) = parser.parse_record(rest);
        let raw = &rest[..used];
        rest = &rest[used..];

        if raw.trim().is_empty() {
            continue;
        }
        records.push(fields);
    }

    if records.is_empty() {
        return Err(CsvError::EmptyInput);
    }

    let header = if options.has_header {
        records.remove(0)
    } else {
        Vec::new()
    };

    tracing::debug!(
        delimiter = %options.delimiter,
        columns = header.len(),
        rows = records.len(),
        "parsed csv table"
    );

    Ok(Table { header, records })
}

/// CSV table reader over in-memory text
///
/// Reads the whole input at once; tables are built per user action and
/// discarded afterwards.
///
/// # Examples
///
/// ```
/// use csvcodec::CsvReader;
///
/// let table = CsvReader::from_text("a;b\n1;2")
///     .delimiter(';')
///     .unwrap()
///     .has_header(true)
///     .read_table()
///     .unwrap();
/// assert_eq!(table.header, vec!["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct CsvReader {
    text: String,
    options: CsvOptions,
}

impl CsvReader {
    /// Create a reader over text, with a header row and comma delimiter
    ///
    /// The text is taken as is: a leading U+FEFF is field data here.
    pub fn from_text(text: impl Into<String>) -> Self {
        CsvReader {
            text: text.into(),
            options: CsvOptions::default(),
        }
    }

    /// Read all of `reader` as UTF-8 text, dropping a leading byte order mark
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| CsvError::ReadError(format!("Failed to read CSV input: {}", e)))?;
        if text.starts_with(BOM) {
            text.drain(..BOM.len_utf8());
        }
        Ok(Self::from_text(text))
    }

    /// Open a CSV file and read it fully
    ///
    /// ```no_run
    /// use csvcodec::CsvReader;
    ///
    /// let table = CsvReader::open("data.csv").unwrap().read_table().unwrap();
    /// println!("{} rows", table.len());
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let file = File::open(path_ref).map_err(|e| {
            CsvError::ReadError(format!(
                "Failed to open CSV file {}: {}",
                path_ref.display(),
                e
            ))
        })?;
        tracing::debug!(path = %path_ref.display(), "reading csv file");
        Self::from_reader(file)
    }

    /// Set custom delimiter (builder pattern)
    ///
    /// Fails for the quote character and line terminators.
    pub fn delimiter(mut self, delim: char) -> Result<Self> {
        self.options.delimiter = Delimiter::new(delim)?;
        Ok(self)
    }

    /// Indicate whether the first non-blank record holds column names (builder pattern)
    pub fn has_header(mut self, has: bool) -> Self {
        self.options.has_header = has;
        self
    }

    /// Replace all options at once (builder pattern)
    pub fn options(mut self, options: CsvOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the raw text this reader holds
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parse the text into a table
    pub fn read_table(&self) -> Result<Table> {
        parse_table(&self.text, &self.options)
    }
}
