//! Model-bundle metadata: which columns feed the model, plus optional risk
//! reference thresholds and mock decay parameters.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use rps_model::RiskReference;

use crate::error::{PredictError, Result};
use crate::mock::DecayParams;

/// Raw reference thresholds as they appear in the bundle file. Either may be
/// absent; classification needs both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskReferenceSpec {
    #[serde(default)]
    pub q33: Option<f64>,
    #[serde(default)]
    pub q66: Option<f64>,
}

impl RiskReferenceSpec {
    pub fn resolve(&self) -> Option<RiskReference> {
        match (self.q33, self.q66) {
            (Some(q33), Some(q66)) => Some(RiskReference { q33, q66 }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelBundle {
    #[serde(default)]
    pub name: Option<String>,
    /// Column names fed to the model, in order.
    pub features: Vec<String>,
    #[serde(default)]
    pub risk_reference: Option<RiskReferenceSpec>,
    #[serde(default)]
    pub decay: Option<DecayParams>,
}

impl ModelBundle {
    /// Usable reference thresholds, if the bundle carries a complete pair.
    pub fn reference(&self) -> Option<RiskReference> {
        self.risk_reference.as_ref().and_then(RiskReferenceSpec::resolve)
    }
}

pub fn load_bundle(path: &Path) -> Result<ModelBundle> {
    let text = std::fs::read_to_string(path).map_err(|source| PredictError::BundleIo {
        path: path.to_path_buf(),
        source,
    })?;
    let bundle: ModelBundle =
        serde_json::from_str(&text).map_err(|source| PredictError::BundleParse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        bundle = bundle.name.as_deref().unwrap_or("<unnamed>"),
        features = bundle.features.len(),
        has_reference = bundle.reference().is_some(),
        "bundle loaded"
    );
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_reference_does_not_resolve() {
        let spec = RiskReferenceSpec {
            q33: Some(0.3),
            q66: None,
        };
        assert_eq!(spec.resolve(), None);

        let complete = RiskReferenceSpec {
            q33: Some(0.3),
            q66: Some(0.6),
        };
        assert_eq!(
            complete.resolve(),
            Some(RiskReference { q33: 0.3, q66: 0.6 })
        );
    }

    #[test]
    fn bundle_parses_with_optional_sections() {
        let bundle: ModelBundle = serde_json::from_str(
            r#"{"features": ["age", "Tumor_Stage"], "risk_reference": {"q33": 0.31}}"#,
        )
        .expect("parse bundle");
        assert_eq!(bundle.features.len(), 2);
        assert_eq!(bundle.reference(), None);
        assert_eq!(bundle.decay, None);

        let full: ModelBundle = serde_json::from_str(
            r#"{
                "name": "demo",
                "features": ["age"],
                "risk_reference": {"q33": 0.31, "q66": 0.62},
                "decay": {"horizon": 1825.0}
            }"#,
        )
        .expect("parse bundle");
        assert_eq!(full.reference(), Some(RiskReference { q33: 0.31, q66: 0.62 }));
        let decay = full.decay.expect("decay");
        assert_eq!(decay.horizon, 1825.0);
        // Unspecified decay fields fall back to the defaults.
        assert_eq!(decay.step, 30.0);
    }
}
