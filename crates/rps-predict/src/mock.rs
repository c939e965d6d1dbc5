//! Placeholder model used when no real survival model is wired in.

use serde::{Deserialize, Serialize};

use rps_model::{SurvivalCurve, SurvivalPoint};

use crate::model::{Prediction, SurvivalModel};

/// Exponential-decay parameters for the mocked curve generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayParams {
    /// Baseline hazard rate.
    pub base: f64,
    /// Hazard added per unit of risk score.
    pub slope: f64,
    /// Sampling cadence in time units.
    pub step: f64,
    /// Last sampled time.
    pub horizon: f64,
}

impl Default for DecayParams {
    fn default() -> Self {
        Self {
            base: 0.0001,
            slope: 0.0002,
            step: 30.0,
            horizon: 3650.0,
        }
    }
}

/// Mocked model: scores a feature vector with a logistic squash of the
/// feature mean, then decays survival as `exp(-lambda * t)` with lambda
/// linear in the score and floored at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSurvivalModel {
    params: DecayParams,
}

impl MockSurvivalModel {
    pub fn new(params: DecayParams) -> Self {
        Self { params }
    }
}

impl SurvivalModel for MockSurvivalModel {
    fn name(&self) -> &str {
        "mock-exponential"
    }

    fn predict(&self, features: &[f64]) -> Prediction {
        let risk_score = logistic_mean(features);
        Prediction {
            risk_score,
            curve: decay_curve(risk_score, self.params),
        }
    }
}

fn logistic_mean(features: &[f64]) -> f64 {
    if features.is_empty() {
        return 0.5;
    }
    let mean = features.iter().sum::<f64>() / features.len() as f64;
    1.0 / (1.0 + (-mean).exp())
}

fn decay_curve(risk_score: f64, params: DecayParams) -> SurvivalCurve {
    let lambda = (params.base + risk_score * params.slope).max(0.0);
    let mut points = Vec::new();
    let mut time = 0.0;
    while time <= params.horizon {
        points.push(SurvivalPoint {
            time,
            probability: (-lambda * time).exp(),
        });
        time += params.step;
    }
    SurvivalCurve::new(points)
}
