//! Serialize a dataset back to delimited text for download.

use std::path::Path;

use tracing::{debug, info};

use rps_model::{Dataset, PredictionResult, Record, Value};
use rps_transform::format_numeric;

use crate::error::{ExportError, Result};

/// Render one cell for export: missing is the empty string, numbers render
/// without trailing zeros, text passes through (the writer quotes fields
/// containing the delimiter).
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Missing => String::new(),
        Value::Number(number) => format_numeric(*number),
        Value::Text(text) => text.clone(),
    }
}

/// Serialize a dataset as CSV text, header first, columns in canonical
/// order. An empty dataset produces no output: callers treat `None` as
/// "nothing exported", not an error.
pub fn export_csv(dataset: &Dataset) -> Result<Option<String>> {
    if dataset.is_empty() {
        debug!("dataset has no rows, export is a no-op");
        return Ok(None);
    }
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&dataset.columns)?;
    for row in &dataset.rows {
        let fields: Vec<String> = dataset
            .columns
            .iter()
            .map(|column| render_value(row.get(column)))
            .collect();
        writer.write_record(&fields)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| ExportError::Flush(error.to_string()))?;
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

/// File-backed export. Returns false when the dataset was empty and nothing
/// was written.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<bool> {
    let Some(text) = export_csv(dataset)? else {
        return Ok(false);
    };
    std::fs::write(path, text).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        rows = dataset.row_count(),
        "exported dataset"
    );
    Ok(true)
}

/// Suggested client-side download name, dated for uniqueness across runs.
pub fn suggested_filename(stem: &str) -> String {
    let date = chrono::Local::now().format("%Y-%m-%d");
    format!("{stem}_{date}.csv")
}

/// Flatten a prediction result collection into a dataset: identifier, score,
/// band, and one survival column per sampled timepoint.
pub fn results_to_dataset(results: &[PredictionResult]) -> Dataset {
    let mut columns = vec![
        "id".to_string(),
        "risk_score".to_string(),
        "risk_band".to_string(),
    ];
    let sample_columns: Vec<String> = results
        .first()
        .map(|first| {
            first
                .sampled
                .iter()
                .map(|point| format!("surv_{}", format_numeric(point.time)))
                .collect()
        })
        .unwrap_or_default();
    columns.extend(sample_columns.iter().cloned());

    let mut dataset = Dataset::new(columns);
    for result in results {
        let mut record = Record::new();
        record.insert("id", Value::Text(result.id.clone()));
        record.insert("risk_score", Value::Number(result.risk_score));
        let band = match result.classification.band {
            Some(band) => Value::Text(band.as_str().to_string()),
            None => Value::Missing,
        };
        record.insert("risk_band", band);
        for (column, point) in sample_columns.iter().zip(&result.sampled) {
            record.insert(column.clone(), Value::Number(point.probability));
        }
        dataset.push_row(record);
    }
    dataset
}
