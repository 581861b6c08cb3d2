//! Loose type inference for the CSV to JSON path
//!
//! This is an opt-in, lossy step layered on top of the codec. It is not part
//! of the round-trip guarantee, and a "wrong" guess is never an error.
//!
//! Rules, checked in order:
//! - JSON number grammar (`-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`)
//!   becomes a number. No `+` sign, no surrounding whitespace, no leading
//!   zeros, so `007` or `+5` stay text. Integer-form text must also format
//!   back to itself (which rejects `-0`) and fit within ±2^53 so IDs and long
//!   digit strings are not silently rounded. Non-finite results stay text.
//! - `true` / `false` in any case become booleans.
//! - `null` in any case becomes null.
//! - Anything else is text, unchanged.

use crate::types::InferredValue;

/// Largest integer an `f64` represents exactly
const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Infer a loose type from field text
pub fn infer_value(text: &str) -> InferredValue {
    if let Some(n) = parse_number(text) {
        return InferredValue::Number(n);
    }
    if text.eq_ignore_ascii_case("true") {
        return InferredValue::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return InferredValue::Bool(false);
    }
    if text.eq_ignore_ascii_case("null") {
        return InferredValue::Null;
    }
    InferredValue::Text(text.to_string())
}

/// Infer every field of a record
pub fn infer_record<S: AsRef<str>>(fields: &[S]) -> Vec<InferredValue> {
    fields.iter().map(|f| infer_value(f.as_ref())).collect()
}

fn parse_number(text: &str) -> Option<f64> {
    let integer_form = match scan_json_number(text.as_bytes()) {
        Some(NumberShape::Integer) => true,
        Some(NumberShape::Decimal) => false,
        None => return None,
    };

    if integer_form {
        let value: i64 = text.parse().ok()?;
        let mut buf = itoa::Buffer::new();
        if buf.format(value) != text || value.unsigned_abs() > MAX_SAFE_INTEGER as u64 {
            return None;
        }
        return Some(value as f64);
    }

    let value: f64 = text.parse().ok()?;
    value.is_finite().then_some(value)
}

#[derive(Debug, PartialEq, Eq)]
enum NumberShape {
    Integer,
    Decimal,
}

fn scan_json_number(b: &[u8]) -> Option<NumberShape> {
    let mut i = 0;
    let digits = |i: &mut usize| {
        let start = *i;
        while b.get(*i).is_some_and(u8::is_ascii_digit) {
            *i += 1;
        }
        *i > start
    };

    if b.first() == Some(&b'-') {
        i += 1;
    }
    match b.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            digits(&mut i);
        }
        _ => return None,
    }

    let mut shape = NumberShape::Integer;
    if b.get(i) == Some(&b'.') {
        i += 1;
        if !digits(&mut i) {
            return None;
        }
        shape = NumberShape::Decimal;
    }
    if matches!(b.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(b.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if !digits(&mut i) {
            return None;
        }
        shape = NumberShape::Decimal;
    }

    (i == b.len()).then_some(shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> InferredValue {
        InferredValue::Text(s.to_string())
    }

    #[test]
    fn test_numbers() {
        assert_eq!(infer_value("42"), InferredValue::Number(42.0));
        assert_eq!(infer_value("-17"), InferredValue::Number(-17.0));
        assert_eq!(infer_value("0"), InferredValue::Number(0.0));
        assert_eq!(infer_value("3.25"), InferredValue::Number(3.25));
        assert_eq!(infer_value("0.5"), InferredValue::Number(0.5));
        assert_eq!(infer_value("1e3"), InferredValue::Number(1000.0));
        assert_eq!(infer_value("-2.5E-2"), InferredValue::Number(-0.025));
    }

    #[test]
    fn test_leading_zero_stays_text() {
        assert_eq!(infer_value("007"), text("007"));
        assert_eq!(infer_value("00.5"), text("00.5"));
        assert_eq!(infer_value("-007"), text("-007"));
    }

    #[test]
    fn test_non_canonical_forms_stay_text() {
        for s in ["+5", ".5", "5.", "1e", "1e+", " 42", "42 ", "-0", "1_000", "0x1F", "-"] {
            assert_eq!(infer_value(s), text(s), "{s:?}");
        }
    }

    #[test]
    fn test_phone_and_id_numbers_stay_text() {
        assert_eq!(infer_value("555-1234"), text("555-1234"));
        assert_eq!(infer_value("12345678901234567890"), text("12345678901234567890"));
        assert_eq!(
            infer_value("-9223372036854775808"),
            text("-9223372036854775808")
        );
        assert_eq!(infer_value("9007199254740993"), text("9007199254740993"));
        assert_eq!(
            infer_value("9007199254740991"),
            InferredValue::Number(9007199254740991.0)
        );
    }

    #[test]
    fn test_overflowing_float_stays_text() {
        assert_eq!(infer_value("1e400"), text("1e400"));
    }

    #[test]
    fn test_booleans_and_null() {
        assert_eq!(infer_value("true"), InferredValue::Bool(true));
        assert_eq!(infer_value("FALSE"), InferredValue::Bool(false));
        assert_eq!(infer_value("True"), InferredValue::Bool(true));
        assert_eq!(infer_value("null"), InferredValue::Null);
        assert_eq!(infer_value("NULL"), InferredValue::Null);
        assert_eq!(infer_value("yes"), text("yes"));
    }

    #[test]
    fn test_other_text_unchanged() {
        assert_eq!(infer_value("abc"), text("abc"));
        assert_eq!(infer_value(""), text(""));
        assert_eq!(infer_value("NaN"), text("NaN"));
        assert_eq!(infer_value("inf"), text("inf"));
    }

    #[test]
    fn test_infer_record() {
        assert_eq!(
            infer_record(&["1", "x", "true"]),
            vec![
                InferredValue::Number(1.0),
                text("x"),
                InferredValue::Bool(true)
            ]
        );
    }
}
