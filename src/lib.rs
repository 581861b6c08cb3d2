//! # csvcodec
//!
//! Lenient CSV record codec for client-side table tools.
//!
//! - **Parsing** never fails on malformed quoting: unterminated quotes run to
//!   the end of the input and every line yields at least one field.
//! - **Serialization** is canonical: only fields that need it are quoted, and
//!   `parse(serialize(table)) == table` for representable tables.
//! - **Type inference** for the CSV to JSON path is a separate, opt-in step.
//!
//! ## Quick Start
//!
//! ```
//! use csvcodec::{parse_table, to_csv_string, CsvOptions};
//!
//! let options = CsvOptions::default();
//! let table = parse_table("name,note\nAnn,\"likes \"\"tea\"\", coffee\"\n", &options).unwrap();
//! assert_eq!(table.records[0][1], "likes \"tea\", coffee");
//!
//! let text = to_csv_string(&table, options.delimiter);
//! assert_eq!(parse_table(&text, &options).unwrap(), table);
//! ```
//!
//! ## CSV to JSON
//!
//! ```
//! use csvcodec::{csv_to_json, CsvOptions};
//!
//! let options = CsvOptions::default().infer_types(true);
//! let json = csv_to_json("zip,count\n007,3", &options).unwrap();
//! assert!(json.contains("\"zip\": \"007\""));
//! assert!(json.contains("\"count\": 3"));
//! ```

pub mod csv;
pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod infer;
pub mod json;
pub mod types;

pub use csv::{CsvEncoder, CsvParser};
pub use csv_reader::{parse_table, CsvReader};
pub use csv_writer::{to_csv_string, CsvWriter};
pub use error::{CsvError, Result};
pub use infer::{infer_record, infer_value};
pub use json::{csv_to_json, json_to_csv, json_to_table, table_to_json};
pub use types::{CsvOptions, Delimiter, InferredValue, Record, Table};
