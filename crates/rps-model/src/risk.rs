use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal risk band derived from comparing a score to two reference
/// quantile thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Intermediate,
    High,
}

impl RiskBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Intermediate => "Intermediate",
            RiskBand::High => "High",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference quantile thresholds supplied by the model bundle, `q33 <= q66`.
/// Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskReference {
    pub q33: f64,
    pub q66: f64,
}

impl RiskReference {
    /// Both thresholds must be finite for classification to proceed.
    pub fn is_usable(&self) -> bool {
        self.q33.is_finite() && self.q66.is_finite()
    }
}

/// Classification outcome. `band` is `None` when no usable reference was
/// available; `boundary` is the threshold the band was decided against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskClassification {
    pub band: Option<RiskBand>,
    pub boundary: Option<f64>,
}

impl RiskClassification {
    pub fn none() -> Self {
        Self {
            band: None,
            boundary: None,
        }
    }
}

/// Map a continuous score into a risk band. Upper bounds are inclusive: a
/// score exactly at q33 is Low, exactly at q66 is Intermediate.
pub fn classify_risk(score: f64, reference: Option<&RiskReference>) -> RiskClassification {
    let Some(reference) = reference else {
        return RiskClassification::none();
    };
    if !reference.is_usable() {
        return RiskClassification::none();
    }
    if score <= reference.q33 {
        RiskClassification {
            band: Some(RiskBand::Low),
            boundary: Some(reference.q33),
        }
    } else if score <= reference.q66 {
        RiskClassification {
            band: Some(RiskBand::Intermediate),
            boundary: Some(reference.q66),
        }
    } else {
        RiskClassification {
            band: Some(RiskBand::High),
            boundary: Some(reference.q66),
        }
    }
}
