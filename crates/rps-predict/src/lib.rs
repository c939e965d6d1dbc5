pub mod bundle;
pub mod error;
pub mod mock;
pub mod model;
pub mod runner;

pub use bundle::{ModelBundle, RiskReferenceSpec, load_bundle};
pub use error::{PredictError, Result};
pub use mock::{DecayParams, MockSurvivalModel};
pub use model::{Prediction, SurvivalModel};
pub use runner::{run_predictions, run_predictions_with_cancel};
