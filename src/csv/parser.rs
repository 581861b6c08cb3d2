//! CSV parsing with lenient RFC 4180-like behavior
//!
//! The parser is total: every input produces at least one field and nothing
//! is rejected. An unterminated quote runs to the end of the input, and text
//! after a closing quote is kept rather than reported.

use crate::types::Delimiter;

pub(crate) const QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    /// Nothing but leading whitespace seen
    Start,
    Unquoted,
    Quoted,
    /// Closing quote seen, waiting for delimiter or end of record
    AfterQuote,
}

/// Accumulates one field while scanning
struct FieldBuf {
    state: FieldState,
    text: String,
    // Stray text after a closing quote
    tail: String,
}

impl FieldBuf {
    fn new() -> Self {
        Self {
            state: FieldState::Start,
            text: String::new(),
            tail: String::new(),
        }
    }

    fn take(&mut self) -> String {
        let value = match self.state {
            FieldState::Unquoted => self.text.trim_end().to_string(),
            FieldState::AfterQuote => {
                let mut value = std::mem::take(&mut self.text);
                value.push_str(self.tail.trim());
                value
            }
            FieldState::Start | FieldState::Quoted => std::mem::take(&mut self.text),
        };
        self.text.clear();
        self.tail.clear();
        self.state = FieldState::Start;
        value
    }
}

/// CSV parser for reading delimited text
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser {
    delimiter: Delimiter,
}

impl CsvParser {
    /// Create a new CSV parser with the given delimiter
    pub fn new(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }

    /// Get the configured delimiter
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Parse one line into fields
    ///
    /// The line is expected without its terminator; a `\n` in it is treated
    /// as ordinary text. Always returns at least one field, so `""` yields
    /// `[""]`. Unquoted fields are trimmed, quoted fields keep their
    /// whitespace.
    pub fn parse_line(&self, line: &str) -> Vec<String> {
        self.scan(line, false).0
    }

    /// Parse one logical record from the start of multi-line text
    ///
    /// The record ends at the first `\n` (or `\r\n`) outside quotes, so quoted
    /// fields may span lines. Returns the fields and the number of bytes
    /// consumed, terminator included. For non-empty input the count is at
    /// least 1.
    pub fn parse_record(&self, input: &str) -> (Vec<String>, usize) {
        self.scan(input, true)
    }

    fn scan(&self, input: &str, multiline: bool) -> (Vec<String>, usize) {
        let delimiter = self.delimiter.as_char();
        let mut fields = Vec::new();
        let mut field = FieldBuf::new();
        let mut chars = input.char_indices().peekable();

        // Every iteration consumes at least one character
        while let Some((idx, ch)) = chars.next() {
            if field.state == FieldState::Quoted {
                if ch == QUOTE {
                    if matches!(chars.peek(), Some(&(_, QUOTE))) {
                        // Escaped quote ("")
                        field.text.push(QUOTE);
                        chars.next();
                    } else {
                        field.state = FieldState::AfterQuote;
                    }
                } else {
                    field.text.push(ch);
                }
                continue;
            }

            if ch == delimiter {
                fields.push(field.take());
                continue;
            }

            if multiline {
                let terminator = match ch {
                    '\n' => Some(1),
                    '\r' if matches!(chars.peek(), Some(&(_, '\n'))) => Some(2),
                    _ => None,
                };
                if let Some(len) = terminator {
                    fields.push(field.take());
                    return (fields, idx + len);
                }
            }

            match field.state {
                FieldState::Start if ch == QUOTE => field.state = FieldState::Quoted,
                FieldState::Start if ch.is_whitespace() => {}
                FieldState::Start => {
                    field.text.push(ch);
                    field.state = FieldState::Unquoted;
                }
                FieldState::Unquoted => field.text.push(ch),
                FieldState::AfterQuote => field.tail.push(ch),
                FieldState::Quoted => unreachable!("quoted state handled above"),
            }
        }

        fields.push(field.take());
        (fields, input.len())
    }
}
