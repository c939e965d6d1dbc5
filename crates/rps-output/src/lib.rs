pub mod error;
pub mod export;

pub use error::{ExportError, Result};
pub use export::{
    export_csv, render_value, results_to_dataset, suggested_filename, write_csv,
};
