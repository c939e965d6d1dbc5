//! Delimited-text parsing for uploaded datasets.
//!
//! The first non-empty line is the header; every later non-empty line is a
//! data row. Rows are realigned to the header: extra fields are dropped,
//! short rows are padded with missing values so a malformed row never fails
//! the whole parse.

use tracing::{debug, warn};

use rps_model::{Dataset, Record, Value};

/// Split one line into fields with a quote-aware scanner. A double quote
/// toggles quoted mode, inside which the separator is literal content; an
/// unterminated quote yields a best-effort final field. Fields are trimmed.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Coerce a raw field. Empty, `NA`, and `NaN` are missing; anything that
/// parses fully as a decimal number is numeric; the rest stays text.
pub fn coerce_field(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "NA" || trimmed == "NaN" {
        return Value::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(number) => Value::Number(number),
        Err(_) => Value::Text(trimmed.to_string()),
    }
}

/// Normalize a header cell: strip BOM and surrounding whitespace, collapse
/// runs of inner whitespace to single spaces.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Parse delimited text into a dataset.
///
/// Embedded newlines inside quoted fields are out of scope: newlines are row
/// boundaries unconditionally.
pub fn parse_delimited(text: &str) -> Dataset {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let Some(header_line) = lines.next() else {
        return Dataset::default();
    };
    let columns: Vec<String> = parse_csv_line(header_line)
        .iter()
        .map(|header| normalize_header(header))
        .collect();
    let mut dataset = Dataset::new(columns);

    let mut padded_rows = 0usize;
    let mut dropped_fields = 0usize;
    for line in lines {
        let fields = parse_csv_line(line);
        if fields.len() > dataset.columns.len() {
            dropped_fields += fields.len() - dataset.columns.len();
        } else if fields.len() < dataset.columns.len() {
            padded_rows += 1;
        }
        let mut record = Record::new();
        for (idx, column) in dataset.columns.iter().enumerate() {
            let value = fields
                .get(idx)
                .map(|field| coerce_field(field))
                .unwrap_or(Value::Missing);
            record.insert(column.clone(), value);
        }
        dataset.push_row(record);
    }

    if padded_rows > 0 || dropped_fields > 0 {
        warn!(
            padded_rows,
            dropped_fields, "rows misaligned with header, recovered"
        );
    }
    debug!(
        rows = dataset.row_count(),
        columns = dataset.columns.len(),
        "parsed delimited text"
    );
    dataset
}
