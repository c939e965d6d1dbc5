pub mod features;
pub mod numeric;
pub mod stage;

pub use features::{feature_value, feature_vector, is_stage_column};
pub use numeric::{format_numeric, parse_f64};
pub use stage::parse_stage_ordinal;
