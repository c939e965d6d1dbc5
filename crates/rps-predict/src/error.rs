use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("dataset has no rows; upload data before running predictions")]
    EmptyDataset,
    #[error("prediction run cancelled")]
    Cancelled,
    #[error("read bundle {}: {source}", .path.display())]
    BundleIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse bundle {}: {source}", .path.display())]
    BundleParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PredictError>;
