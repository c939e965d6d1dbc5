//! Spreadsheet ingestion via calamine. The first sheet's first row is the
//! header; typed cells pass through without re-coercion.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use rps_model::{Dataset, Record, Value};

use crate::delimited::normalize_header;
use crate::error::{IngestError, Result};

pub fn parse_spreadsheet(path: &Path) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .map_err(|source| IngestError::Spreadsheet {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Dataset::default());
    };
    let columns: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&cell_text(cell)))
        .collect();
    let mut dataset = Dataset::new(columns);

    for row in rows {
        let mut record = Record::new();
        for (idx, column) in dataset.columns.iter().enumerate() {
            let value = row.get(idx).map(map_cell).unwrap_or(Value::Missing);
            record.insert(column.clone(), value);
        }
        dataset.push_row(record);
    }
    debug!(
        rows = dataset.row_count(),
        columns = dataset.columns.len(),
        "parsed spreadsheet"
    );
    Ok(dataset)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// The spreadsheet reader already distinguishes types, so values map across
/// directly instead of going through field coercion.
fn map_cell(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Missing,
        Data::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Value::Missing
            } else {
                Value::Text(trimmed.to_string())
            }
        }
        Data::Float(number) => Value::Number(*number),
        Data::Int(number) => Value::Number(*number as f64),
        Data::Bool(flag) => Value::Number(f64::from(u8::from(*flag))),
        Data::DateTime(datetime) => Value::Number(datetime.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Value::Text(text.clone()),
        Data::Error(_) => Value::Missing,
    }
}
