//! Clinical-stage ordinal encoding.

use rps_model::Value;

use crate::numeric::format_numeric;

const STAGE_TABLE: [(&str, f64); 5] = [
    ("I", 1.0),
    ("II", 2.0),
    ("III", 3.0),
    ("IV", 4.0),
    ("V", 5.0),
];

/// Encode an arbitrary cell as a stage ordinal, first match wins:
///
/// 1. missing or NaN input encodes as 0;
/// 2. a case-insensitive `stage` label followed by optional whitespace and
///    ordinal-numeral letters (I/V/X) is looked up in the stage table, and a
///    numeral the table does not know is terminal: it encodes as 0 rather
///    than falling through to the later branches;
/// 3. a bare numeral string ("iv") is looked up in the table;
/// 4. anything that parses as a number passes through unchanged; the rest
///    encodes as 0.
pub fn parse_stage_ordinal(value: &Value) -> f64 {
    match value {
        Value::Missing => 0.0,
        Value::Number(number) if number.is_nan() => 0.0,
        Value::Number(number) => stage_ordinal_from_text(&format_numeric(*number)),
        Value::Text(text) => stage_ordinal_from_text(text),
    }
}

fn stage_ordinal_from_text(text: &str) -> f64 {
    if let Some(numeral) = stage_numeral(text) {
        return table_lookup(&numeral).unwrap_or(0.0);
    }
    let trimmed = text.trim();
    if let Some(ordinal) = table_lookup(&trimmed.to_ascii_uppercase()) {
        return ordinal;
    }
    trimmed.parse::<f64>().unwrap_or(0.0)
}

fn table_lookup(numeral: &str) -> Option<f64> {
    STAGE_TABLE
        .iter()
        .find(|(key, _)| *key == numeral)
        .map(|(_, ordinal)| *ordinal)
}

/// Scan for `stage` (any case) followed by optional whitespace and at least
/// one ordinal-numeral letter; returns the upper-cased numeral.
fn stage_numeral(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let needle = b"stage";
    if bytes.len() < needle.len() {
        return None;
    }
    for start in 0..=bytes.len() - needle.len() {
        if !bytes[start..start + needle.len()].eq_ignore_ascii_case(needle) {
            continue;
        }
        let mut idx = start + needle.len();
        while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
            idx += 1;
        }
        let numeral_start = idx;
        while idx < bytes.len() && matches!(bytes[idx].to_ascii_uppercase(), b'I' | b'V' | b'X') {
            idx += 1;
        }
        if idx > numeral_start {
            let numeral = String::from_utf8_lossy(&bytes[numeral_start..idx]).to_ascii_uppercase();
            return Some(numeral);
        }
    }
    None
}
