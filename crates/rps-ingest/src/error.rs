use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file type: {filename} (accepted: .csv, .xlsx, .xls)")]
    UnsupportedFormat { filename: String },
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("spreadsheet {}: {source}", .path.display())]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("no worksheet in {}", .path.display())]
    EmptyWorkbook { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
