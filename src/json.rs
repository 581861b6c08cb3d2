//! CSV to JSON conversion and back
//!
//! Tables with a header become arrays of objects (keys in header order),
//! tables without one become arrays of arrays. Type inference is optional and
//! follows [`crate::infer`].

use crate::csv_reader::parse_table;
use crate::csv_writer::to_csv_string;
use crate::error::{CsvError, Result};
use crate::infer::infer_value;
use crate::types::{CsvOptions, Delimiter, InferredValue, Record, Table};
use indexmap::IndexSet;
use serde_json::{Map, Number, Value};

/// Largest integer an `f64` represents exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<InferredValue> for Value {
    fn from(value: InferredValue) -> Self {
        match value {
            InferredValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                Value::from(n as i64)
            }
            InferredValue::Number(n) => Number::from_f64(n).map_or(Value::Null, Value::Number),
            InferredValue::Bool(b) => Value::Bool(b),
            InferredValue::Null => Value::Null,
            InferredValue::Text(s) => Value::String(s),
        }
    }
}

fn cell_to_json(text: &str, infer: bool) -> Value {
    if infer {
        infer_value(text).into()
    } else {
        Value::String(text.to_string())
    }
}

/// Object keys for every column position
///
/// Empty names and positions past the header get `column{n}` (1-based).
/// Duplicates get a `_2`, `_3`, ... suffix so no column is overwritten.
fn column_keys(header: &[String], width: usize) -> Vec<String> {
    let mut used: IndexSet<String> = IndexSet::with_capacity(width);
    for idx in 0..width.max(header.len()) {
        let base = match header.get(idx) {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("column{}", idx + 1),
        };
        let mut key = base.clone();
        let mut n = 2;
        while used.contains(&key) {
            key = format!("{}_{}", base, n);
            n += 1;
        }
        used.insert(key);
    }
    used.into_iter().collect()
}

/// Convert a table to a JSON value
///
/// With a header: an array of objects. Short rows fill missing header
/// columns with `null`; fields past the header are kept under generated
/// keys. Without a header: an array of arrays.
pub fn table_to_json(table: &Table, infer: bool) -> Value {
    if !table.has_header() {
        return Value::Array(
            table
                .records
                .iter()
                .map(|r| Value::Array(r.iter().map(|f| cell_to_json(f, infer)).collect()))
                .collect(),
        );
    }

    if !table.is_rectangular() {
        tracing::debug!(
            columns = table.header.len(),
            width = table.width(),
            "ragged rows in csv to json conversion"
        );
    }

    let keys = column_keys(&table.header, table.width());
    let header_len = table.header.len();
    let rows = table
        .records
        .iter()
        .map(|record| {
            let mut obj = Map::with_capacity(keys.len());
            for (idx, key) in keys.iter().enumerate() {
                let value = match record.get(idx) {
                    Some(text) => cell_to_json(text, infer),
                    None if idx < header_len => Value::Null,
                    None => continue,
                };
                obj.insert(key.clone(), value);
            }
            Value::Object(obj)
        })
        .collect();
    Value::Array(rows)
}

/// Parse CSV text and render it as pretty-printed JSON
///
/// # Examples
///
/// ```
/// use csvcodec::{csv_to_json, CsvOptions};
///
/// let json = csv_to_json("id,ok\n7,true", &CsvOptions::default().infer_types(true)).unwrap();
/// assert_eq!(json, "[\n  {\n    \"id\": 7,\n    \"ok\": true\n  }\n]");
/// ```
pub fn csv_to_json(text: &str, options: &CsvOptions) -> Result<String> {
    let table = parse_table(text, options)?;
    let value = table_to_json(&table, options.infer_types);
    Ok(serde_json::to_string_pretty(&value)?)
}

fn scalar_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Nested values as compact JSON
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn objects_to_table(objects: &[&Map<String, Value>]) -> Table {
    let mut keys: IndexSet<&str> = IndexSet::new();
    for obj in objects {
        keys.extend(obj.keys().map(String::as_str));
    }

    let records: Vec<Record> = objects
        .iter()
        .map(|obj| {
            keys.iter()
                .map(|k| obj.get(*k).map(scalar_to_text).unwrap_or_default())
                .collect()
        })
        .collect();
    let header = keys.into_iter().map(str::to_string).collect();
    Table::new(header, records)
}

/// Lay out a JSON value as a table
///
/// Accepts an array of objects (header = union of keys in first-seen order),
/// a single object (one row), or an array of arrays (no header). A layout
/// with no fields at all, such as `[]`, `{}`, `[{}]` or `[[]]`, is
/// [`CsvError::EmptyInput`], the same as blank CSV text.
pub fn json_to_table(value: &Value) -> Result<Table> {
    let table = match value {
        Value::Object(obj) => objects_to_table(&[obj]),
        Value::Array(items) => {
            if let Some(objects) = items.iter().map(Value::as_object).collect::<Option<Vec<_>>>() {
                objects_to_table(&objects)
            } else if let Some(rows) = items.iter().map(Value::as_array).collect::<Option<Vec<_>>>()
            {
                let records = rows
                    .iter()
                    .map(|row| row.iter().map(scalar_to_text).collect())
                    .collect();
                Table::without_header(records)
            } else {
                return Err(CsvError::UnsupportedJson(
                    "array items must be all objects or all arrays".to_string(),
                ));
            }
        }
        other => {
            return Err(CsvError::UnsupportedJson(format!(
                "expected an array or object, got {}",
                json_kind(other)
            )))
        }
    };

    if table.width() == 0 {
        return Err(CsvError::EmptyInput);
    }
    Ok(table)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse JSON text and serialize it as CSV
///
/// # Examples
///
/// ```
/// use csvcodec::{json_to_csv, Delimiter};
///
/// let csv = json_to_csv(r#"[{"a": 1, "b": "x,y"}, {"b": null, "c": true}]"#, Delimiter::COMMA).unwrap();
/// assert_eq!(csv, "a,b,c\n1,\"x,y\",\n,,true");
/// ```
pub fn json_to_csv(text: &str, delimiter: Delimiter) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    let table = json_to_table(&value)?;
    Ok(to_csv_string(&table, delimiter))
}
