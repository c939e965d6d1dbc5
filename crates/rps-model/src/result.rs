use serde::{Deserialize, Serialize};

use crate::curve::{SurvivalCurve, SurvivalPoint};
use crate::risk::RiskClassification;

/// Per-subject prediction aggregate. The whole collection is replaced,
/// never patched, whenever predictions are re-run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub id: String,
    pub risk_score: f64,
    pub classification: RiskClassification,
    pub curve: SurvivalCurve,
    /// Curve evaluated at the caller's chosen timepoints.
    pub sampled: Vec<SurvivalPoint>,
}
