use rps_model::SurvivalCurve;

/// What a model produces for one subject: a continuous risk score and a
/// survival curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub risk_score: f64,
    pub curve: SurvivalCurve,
}

/// The seam between the pipeline and whatever computes survival. Query and
/// classification logic only ever see this contract, so the mocked
/// implementation can be replaced by a real model without touching them.
pub trait SurvivalModel {
    /// Model identifier for logs and summaries.
    fn name(&self) -> &str;

    fn predict(&self, features: &[f64]) -> Prediction;
}
