//! CSV encoding in canonical form: only fields that need it are quoted

use super::parser::QUOTE;
use crate::types::Delimiter;

/// CSV encoder for writing properly formatted CSV data
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvEncoder {
    delimiter: Delimiter,
}

impl CsvEncoder {
    /// Create a new CSV encoder with the given delimiter
    pub fn new(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }

    /// Encode entire row into buffer (no line terminator)
    ///
    /// A row that would otherwise encode to a blank line (one empty field, or
    /// only empty fields around a whitespace delimiter) gets its first field
    /// written as `""` so it is not dropped when read back.
    pub fn encode_row<S: AsRef<str>>(&self, fields: &[S], buffer: &mut String) {
        let delimiter = self.delimiter.as_char();
        let blank = !fields.is_empty()
            && (fields.len() == 1 || delimiter.is_whitespace())
            && fields.iter().all(|f| f.as_ref().is_empty());

        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                buffer.push(delimiter);
            } else if blank {
                buffer.push(QUOTE);
                buffer.push(QUOTE);
                continue;
            }
            self.encode_field(field.as_ref(), buffer);
        }
    }

    /// Encode single field with quoting/escaping as needed
    pub fn encode_field(&self, field: &str, buffer: &mut String) {
        if self.needs_quoting(field) {
            buffer.push(QUOTE);
            for ch in field.chars() {
                if ch == QUOTE {
                    // Escape quotes by doubling: " -> ""
                    buffer.push(QUOTE);
                }
                buffer.push(ch);
            }
            buffer.push(QUOTE);
        } else {
            buffer.push_str(field);
        }
    }

    /// Check if field requires quoting
    ///
    /// Edge whitespace counts, since the parser trims unquoted fields.
    pub fn needs_quoting(&self, field: &str) -> bool {
        let delimiter = self.delimiter.as_char();
        field.starts_with(char::is_whitespace)
            || field.ends_with(char::is_whitespace)
            || field
                .chars()
                .any(|c| c == delimiter || c == QUOTE || c == '\n' || c == '\r')
    }
}
