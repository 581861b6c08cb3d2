//! WASM adapter exposing the CSV codec to the browser table tools

use csvcodec::{CsvOptions, Delimiter, Table};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

fn js_err<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn options(delimiter: &str, has_header: bool, infer: bool) -> Result<CsvOptions, JsValue> {
    let delimiter = Delimiter::try_from(delimiter).map_err(js_err)?;
    Ok(CsvOptions::default()
        .delimiter(delimiter)
        .has_header(has_header)
        .infer_types(infer))
}

/// Parse CSV text into `{ header: string[], records: string[][] }`
#[wasm_bindgen]
pub fn parse_csv(contents: &str, delimiter: &str, has_header: bool) -> Result<JsValue, JsValue> {
    let opts = options(delimiter, has_header, false)?;
    let table = csvcodec::parse_table(contents, &opts).map_err(js_err)?;
    to_value(&table).map_err(js_err)
}

/// Serialize rows (and an optional header) back into CSV text
#[wasm_bindgen]
pub fn to_csv(records: JsValue, header: JsValue, delimiter: &str) -> Result<String, JsValue> {
    let delimiter = Delimiter::try_from(delimiter).map_err(js_err)?;
    let records: Vec<Vec<String>> = from_value(records).map_err(js_err)?;
    let header: Vec<String> = if header.is_undefined() || header.is_null() {
        Vec::new()
    } else {
        from_value(header).map_err(js_err)?
    };
    Ok(csvcodec::to_csv_string(&Table::new(header, records), delimiter))
}

/// Convert CSV text to pretty-printed JSON
#[wasm_bindgen]
pub fn csv_to_json(
    contents: &str,
    delimiter: &str,
    has_header: bool,
    infer: bool,
) -> Result<String, JsValue> {
    let opts = options(delimiter, has_header, infer)?;
    csvcodec::csv_to_json(contents, &opts).map_err(js_err)
}

/// Convert JSON text (array of objects or arrays) to CSV text
#[wasm_bindgen]
pub fn json_to_csv(contents: &str, delimiter: &str) -> Result<String, JsValue> {
    let delimiter = Delimiter::try_from(delimiter).map_err(js_err)?;
    csvcodec::json_to_csv(contents, delimiter).map_err(js_err)
}
