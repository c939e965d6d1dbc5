//! Per-record feature vectors for the model boundary.

use rps_model::{Record, Value};

use crate::numeric::parse_f64;
use crate::stage::parse_stage_ordinal;

/// Stage-labelled columns are recognized by name and routed through the
/// ordinal encoder.
pub fn is_stage_column(name: &str) -> bool {
    name.to_ascii_lowercase().contains("stage")
}

/// Numeric value of one cell as a model feature. Missing, non-finite, and
/// unparseable values contribute zero.
pub fn feature_value(value: &Value, column: &str) -> f64 {
    if is_stage_column(column) {
        return parse_stage_ordinal(value);
    }
    match value {
        Value::Number(number) if number.is_finite() => *number,
        Value::Number(_) => 0.0,
        Value::Text(text) => parse_f64(text).unwrap_or(0.0),
        Value::Missing => 0.0,
    }
}

/// Build the feature vector for one record, in the bundle's feature order.
pub fn feature_vector(record: &Record, feature_names: &[String]) -> Vec<f64> {
    feature_names
        .iter()
        .map(|name| feature_value(record.get(name), name))
        .collect()
}
