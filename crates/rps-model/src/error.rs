use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    #[error("row index {index} out of bounds ({rows} rows)")]
    RowOutOfBounds { index: usize, rows: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
