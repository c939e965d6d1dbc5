//! Result structs shared by commands and summaries.

use std::path::PathBuf;

use rps_ingest::SourceInfo;
use rps_model::PredictionResult;

#[derive(Debug)]
pub struct PredictOutcome {
    pub source: SourceInfo,
    pub id_column: Option<String>,
    pub bundle_name: String,
    pub model_name: String,
    pub timepoints: Vec<f64>,
    pub results: Vec<PredictionResult>,
    /// Where the export landed; absent for dry runs and empty exports.
    pub output: Option<PathBuf>,
}
