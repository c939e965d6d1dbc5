//! Upload dispatch and provenance.

use std::fmt;
use std::path::Path;

use sha2::Digest;
use tracing::info;

use rps_model::Dataset;

use crate::delimited::parse_delimited;
use crate::error::{IngestError, Result};
use crate::spreadsheet::parse_spreadsheet;

/// Suffixes the upload interface accepts, quoted in the rejection message.
pub const ACCEPTED_SUFFIXES: [&str; 3] = [".csv", ".xlsx", ".xls"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Delimited,
    Spreadsheet,
}

impl TableFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableFormat::Delimited => "delimited",
            TableFormat::Spreadsheet => "spreadsheet",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Provenance of one upload: where it came from and what it hashed to.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub filename: String,
    pub format: TableFormat,
    /// sha256 of the raw file bytes, hex encoded.
    pub sha256: String,
    pub rows: usize,
    pub columns: usize,
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}

/// Classify a file by its lowercase suffix.
pub fn detect_format(path: &Path) -> Result<TableFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "csv" => Ok(TableFormat::Delimited),
        "xlsx" | "xls" => Ok(TableFormat::Spreadsheet),
        _ => Err(IngestError::UnsupportedFormat {
            filename: path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("<unnamed>")
                .to_string(),
        }),
    }
}

/// Load a supported file into a dataset plus its provenance. A malformed row
/// never fails the parse; an unsupported suffix fails the whole operation.
pub fn read_table(path: &Path) -> Result<(Dataset, SourceInfo)> {
    let format = detect_format(path)?;
    let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = match format {
        TableFormat::Delimited => parse_delimited(&String::from_utf8_lossy(&bytes)),
        TableFormat::Spreadsheet => parse_spreadsheet(path)?,
    };
    let info = SourceInfo {
        filename: path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("<unnamed>")
            .to_string(),
        format,
        sha256: sha256_hex(&bytes),
        rows: dataset.row_count(),
        columns: dataset.columns.len(),
    };
    info!(
        filename = %info.filename,
        format = %info.format,
        rows = info.rows,
        columns = info.columns,
        "table loaded"
    );
    Ok((dataset, info))
}
