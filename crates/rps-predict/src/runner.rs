//! Prediction runner: one pass over a dataset, producing the full result
//! collection atomically. Re-running replaces the prior collection; nothing
//! is merged.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use rps_model::{Dataset, PredictionResult, QueryMode, Record, Value, classify_risk};
use rps_transform::{feature_vector, format_numeric};

use crate::bundle::ModelBundle;
use crate::error::{PredictError, Result};
use crate::model::SurvivalModel;

pub fn run_predictions(
    dataset: &Dataset,
    id_column: Option<&str>,
    bundle: &ModelBundle,
    model: &dyn SurvivalModel,
    timepoints: &[f64],
) -> Result<Vec<PredictionResult>> {
    let cancel = AtomicBool::new(false);
    run_predictions_with_cancel(dataset, id_column, bundle, model, timepoints, &cancel)
}

/// Cancellable form: the flag is checked between rows, and a cancelled run
/// discards all partial results.
pub fn run_predictions_with_cancel(
    dataset: &Dataset,
    id_column: Option<&str>,
    bundle: &ModelBundle,
    model: &dyn SurvivalModel,
    timepoints: &[f64],
    cancel: &AtomicBool,
) -> Result<Vec<PredictionResult>> {
    if dataset.is_empty() {
        return Err(PredictError::EmptyDataset);
    }
    let reference = bundle.reference();
    if reference.is_none() {
        debug!("bundle has no usable risk reference, bands degrade to none");
    }

    let mut results = Vec::with_capacity(dataset.row_count());
    for (index, row) in dataset.rows.iter().enumerate() {
        if cancel.load(Ordering::SeqCst) {
            return Err(PredictError::Cancelled);
        }
        let features = feature_vector(row, &bundle.features);
        let prediction = model.predict(&features);
        let classification = classify_risk(prediction.risk_score, reference.as_ref());
        let sampled = prediction.curve.sample(timepoints, QueryMode::AsOf);
        results.push(PredictionResult {
            id: subject_id(row, id_column, index),
            risk_score: prediction.risk_score,
            classification,
            curve: prediction.curve,
            sampled,
        });
    }
    info!(
        rows = results.len(),
        model = model.name(),
        timepoints = timepoints.len(),
        "prediction run complete"
    );
    Ok(results)
}

/// Subject identifier: the identifier column when present and populated,
/// else the 1-based row number.
fn subject_id(row: &Record, id_column: Option<&str>, index: usize) -> String {
    if let Some(column) = id_column {
        match row.get(column) {
            Value::Text(text) => return text.clone(),
            Value::Number(number) => return format_numeric(*number),
            Value::Missing => {}
        }
    }
    (index + 1).to_string()
}
