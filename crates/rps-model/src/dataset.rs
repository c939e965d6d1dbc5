use std::collections::BTreeMap;

use crate::error::{ModelError, Result};

/// A scalar cell value. A column missing for a given row is always
/// represented as `Missing`, never omitted from the row.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Number(f64),
    Text(String),
    Missing,
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

const MISSING: Value = Value::Missing;

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub cells: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell value for a column, `Missing` when the row has no entry.
    pub fn get(&self, column: &str) -> &Value {
        self.cells.get(column).unwrap_or(&MISSING)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.cells.insert(column.into(), value);
    }
}

/// An ordered record collection. Column order is fixed by the header of the
/// source upload and is canonical for export.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push_row(&mut self, row: Record) {
        self.rows.push(row);
    }

    /// Cell value at (row, column), `Missing` when the row has no entry.
    pub fn value(&self, row: usize, column: &str) -> &Value {
        self.rows.get(row).map_or(&MISSING, |r| r.get(column))
    }

    /// In-place cell edit. The column must exist in the header.
    pub fn set_value(&mut self, row: usize, column: &str, value: Value) -> Result<()> {
        if !self.columns.iter().any(|c| c == column) {
            return Err(ModelError::ColumnNotFound(column.to_string()));
        }
        let rows = self.rows.len();
        let record = self
            .rows
            .get_mut(row)
            .ok_or(ModelError::RowOutOfBounds { index: row, rows })?;
        record.insert(column, value);
        Ok(())
    }

    pub fn remove_row(&mut self, row: usize) -> Option<Record> {
        if row < self.rows.len() {
            Some(self.rows.remove(row))
        } else {
            None
        }
    }
}
