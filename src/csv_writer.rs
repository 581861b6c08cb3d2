//! CSV serialization of tables into canonical delimited text

use crate::csv::CsvEncoder;
use crate::error::{CsvError, Result};
use crate::types::{Delimiter, InferredValue, Table};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize a table: header line (if any), then one line per record
///
/// Lines are joined with `\n` and there is no trailing newline. Reading the
/// output back with the same delimiter and `has_header = table.has_header()`
/// reproduces the table field for field.
///
/// # Examples
///
/// ```
/// use csvcodec::{to_csv_string, Delimiter, Table};
///
/// let table = Table::new(
///     vec!["name".into(), "quote".into()],
///     vec![vec!["Bob".into(), "say \"hi\", then leave".into()]],
/// );
/// assert_eq!(
///     to_csv_string(&table, Delimiter::COMMA),
///     "name,quote\nBob,\"say \"\"hi\"\", then leave\""
/// );
/// ```
pub fn to_csv_string(table: &Table, delimiter: Delimiter) -> String {
    let mut writer = CsvWriter::new().with_delimiter(delimiter);
    writer.write_table(table);
    writer.finish()
}

/// In-memory CSV writer
///
/// Rows are encoded as they are written. Use [`CsvWriter::finish`] to get
/// the text or [`CsvWriter::save`] to write it to a file.
///
/// # Examples
///
/// ```
/// use csvcodec::CsvWriter;
///
/// let mut writer = CsvWriter::new();
/// writer.write_row(["Name", "Age", "City"]);
/// writer.write_row(["Alice", "30", "New York, NY"]);
/// assert_eq!(writer.finish(), "Name,Age,City\nAlice,30,\"New York, NY\"");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvWriter {
    buffer: String,
    row_count: u64,
    delimiter: Delimiter,
}

impl CsvWriter {
    /// Create a writer with the comma delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter (builder pattern)
    ///
    /// Fails for the quote character and line terminators.
    pub fn delimiter(self, delim: char) -> Result<Self> {
        Ok(self.with_delimiter(Delimiter::new(delim)?))
    }

    /// Set an already validated delimiter (builder pattern)
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write a row of strings
    pub fn write_row<I, S>(&mut self, data: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<S> = data.into_iter().collect();
        if self.row_count > 0 {
            self.buffer.push('\n');
        }
        CsvEncoder::new(self.delimiter).encode_row(&fields, &mut self.buffer);
        self.row_count += 1;
    }

    /// Write a row of inferred values, formatted with their `Display` form
    pub fn write_row_typed(&mut self, values: &[InferredValue]) {
        self.write_row(values.iter().map(|v| match v {
            InferredValue::Null => String::new(),
            other => other.to_string(),
        }));
    }

    /// Write multiple rows at once
    pub fn write_rows_batch<I, R, S>(&mut self, rows: I)
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for row_data in rows {
            self.write_row(row_data);
        }
    }

    /// Write a whole table, header first when present
    pub fn write_table(&mut self, table: &Table) {
        if table.has_header() {
            self.write_row(&table.header);
        }
        self.write_rows_batch(&table.records);
        tracing::debug!(
            delimiter = %self.delimiter,
            columns = table.header.len(),
            rows = table.records.len(),
            "serialized csv table"
        );
    }

    /// Get the number of lines written (header included)
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Get the text written so far
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the CSV text
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Write the CSV text to a file, consuming the writer
    ///
    /// ```no_run
    /// use csvcodec::CsvWriter;
    ///
    /// let mut writer = CsvWriter::new();
    /// writer.write_row(["Name", "Age"]);
    /// writer.save("people.csv").unwrap();
    /// ```
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let path_ref = path.as_ref();
        let file = File::create(path_ref).map_err(|e| {
            CsvError::WriteError(format!(
                "Failed to create CSV file {}: {}",
                path_ref.display(),
                e
            ))
        })?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(self.buffer.as_bytes())
            .map_err(|e| CsvError::WriteError(format!("Failed to write to file: {}", e)))?;
        writer
            .flush()
            .map_err(|e| CsvError::WriteError(format!("Failed to flush file: {}", e)))?;
        tracing::debug!(path = %path_ref.display(), rows = self.row_count, "saved csv file");
        Ok(())
    }
}
