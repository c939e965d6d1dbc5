pub mod curve;
pub mod dataset;
pub mod error;
pub mod result;
pub mod risk;

pub use curve::{QueryMode, SurvivalCurve, SurvivalPoint};
pub use dataset::{Dataset, Record, Value};
pub use error::{ModelError, Result};
pub use result::PredictionResult;
pub use risk::{RiskBand, RiskClassification, RiskReference, classify_risk};
